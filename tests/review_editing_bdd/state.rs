//! Scenario state for the review editing BDD tests.

use marquee::Session;
use marquee::tui::MarqueeApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use crate::support::MoviesApi;

/// State shared across steps in a review editing scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct EditingState {
    /// Mock movies API.
    pub(crate) api: Slot<MoviesApi>,
    /// Application model under test.
    pub(crate) app: Slot<MarqueeApp>,
}

impl EditingState {
    /// Returns the mock API, starting it on first use.
    pub(crate) fn api(&self) -> MoviesApi {
        if self.api.with_ref(|_| ()).is_none() {
            self.api.set(MoviesApi::start());
        }
        self.api
            .get()
            .unwrap_or_else(|| panic!("mock API not initialised after set"))
    }

    /// Starts the client unless it is already running.
    pub(crate) fn ensure_app(&self) {
        if self.app.with_ref(|_| ()).is_some() {
            return;
        }
        let api = self.api();
        let (mut app, initial) = api.app();
        api.settle(&mut app, initial);
        self.app.set(app);
    }
}

/// Runs `step` against the running application, starting it if needed.
pub(crate) fn with_app<T>(
    state: &EditingState,
    step: impl FnOnce(&MoviesApi, &mut MarqueeApp) -> T,
) -> T {
    state.ensure_app();
    let api = state.api();
    state
        .app
        .with_mut(|app| step(&api, app))
        .unwrap_or_else(|| panic!("client has not started"))
}

/// Returns the session name shown for `app`, if any.
pub(crate) fn session_name(app: &MarqueeApp) -> Option<String> {
    app.session().current().map(Session::name).map(str::to_owned)
}
