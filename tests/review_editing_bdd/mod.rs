//! Support modules for the review editing BDD tests.

pub(crate) mod requests;
pub(crate) mod state;

pub(crate) use requests::{json_bodies, requests_to};
pub(crate) use state::{EditingState, session_name, with_app};
