//! Scenario state for the movie browsing BDD tests.

use marquee::tui::MarqueeApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use crate::support::MoviesApi;

/// State shared across steps in a browsing scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct BrowsingState {
    /// Mock movies API.
    pub(crate) api: Slot<MoviesApi>,
    /// Application model under test.
    pub(crate) app: Slot<MarqueeApp>,
}

impl BrowsingState {
    /// Returns the mock API, starting it on first use.
    pub(crate) fn api(&self) -> MoviesApi {
        if self.api.with_ref(|_| ()).is_none() {
            self.api.set(MoviesApi::start());
        }
        self.api
            .get()
            .unwrap_or_else(|| panic!("mock API not initialised after set"))
    }
}

/// Runs `step` against the running application.
pub(crate) fn with_app<T>(
    state: &BrowsingState,
    step: impl FnOnce(&MoviesApi, &mut MarqueeApp) -> T,
) -> T {
    let api = state.api();
    state
        .app
        .with_mut(|app| step(&api, app))
        .unwrap_or_else(|| panic!("client has not started"))
}
