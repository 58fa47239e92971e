//! Shared harness for behavioural tests against a mock movies API.
//!
//! The harness owns a Tokio runtime and a Wiremock server, and drives the
//! application model by resolving each command it returns until no further
//! command is produced.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::Cmd;
use marquee::tui::messages::AppMsg;
use marquee::tui::{AppContext, MarqueeApp};
use marquee::{GatewayConfig, HttpMovieGateway, MovieDataService};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Path of the movies collection on the mock server.
pub const MOVIES_PATH: &str = "/api/v1/movies";

/// Editor confirmation delay used by scenarios.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(20);

/// Runtime and mock server shared by the steps of one scenario.
#[derive(Clone)]
pub struct MoviesApi {
    runtime: Rc<Runtime>,
    server: Rc<MockServer>,
}

impl MoviesApi {
    /// Starts a runtime and mock server.
    ///
    /// # Panics
    ///
    /// Panics if the Tokio runtime cannot be created.
    pub fn start() -> Self {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        let server = runtime.block_on(MockServer::start());
        Self {
            runtime: Rc::new(runtime),
            server: Rc::new(server),
        }
    }

    /// Runs `future` to completion on the scenario runtime.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Mounts `mock` on the server.
    pub fn mount(&self, mock: Mock) {
        self.block_on(mock.mount(&self.server));
    }

    /// Returns the requests the server has seen.
    pub fn received(&self) -> Vec<wiremock::Request> {
        self.block_on(self.server.received_requests())
            .unwrap_or_default()
    }

    /// Creates the application against the mock server, returning the
    /// command that loads the movie list.
    ///
    /// # Panics
    ///
    /// Panics if the gateway rejects the mock server address.
    pub fn app(&self) -> (MarqueeApp, Option<Cmd>) {
        let config = GatewayConfig::new(
            format!("{}{MOVIES_PATH}", self.server.uri()),
            Duration::from_secs(2),
        );
        let gateway = HttpMovieGateway::new(&config)
            .unwrap_or_else(|error| panic!("gateway should accept the mock server: {error}"));
        MarqueeApp::new(AppContext {
            service: MovieDataService::new(Arc::new(gateway)),
            redirect_delay: REDIRECT_DELAY,
        })
    }

    /// Resolves `cmd` and every command that follows from it.
    pub fn settle(&self, app: &mut MarqueeApp, mut cmd: Option<Cmd>) {
        while let Some(pending) = cmd.take() {
            let Some(boxed) = self.block_on(pending) else {
                return;
            };
            let Ok(msg) = boxed.downcast::<AppMsg>() else {
                return;
            };
            cmd = app.handle_message(&msg);
        }
    }

    /// Sends `msg` to the application and settles what it triggers.
    pub fn send(&self, app: &mut MarqueeApp, msg: &AppMsg) {
        let cmd = app.handle_message(msg);
        self.settle(app, cmd);
    }

    /// Types `text` into the focused field.
    pub fn type_text(&self, app: &mut MarqueeApp, text: &str) {
        for ch in text.chars() {
            self.send(app, &AppMsg::InsertChar(ch));
        }
    }
}

/// Builds a movie record as the API encodes it.
pub fn movie_json(id: &str, title: &str, reviews: &[Value]) -> Value {
    json!({
        "_id": id,
        "title": title,
        "rated": "PG-13",
        "plot": "A thief enters dreams.",
        "year": 2010,
        "genres": ["Sci-Fi"],
        "reviews": reviews,
    })
}
