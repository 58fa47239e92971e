//! Support modules for the movie browsing BDD tests.

pub(crate) mod state;

pub(crate) use state::{BrowsingState, with_app};
