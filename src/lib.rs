//! Marquee library crate: a terminal client for browsing movies and managing
//! reviews through a remote movies API.
//!
//! The [`api`] module talks to the remote collection and validates every
//! call before it is issued. [`session`] tracks the simulated login that
//! gates review authoring, and [`tui`] provides the interactive client.

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
pub mod tui;

pub use api::{
    ApiError, DEFAULT_BASE_URL, GatewayConfig, HttpMovieGateway, Movie, MovieDataService,
    MovieGateway, Review,
};
pub use config::{MarqueeConfig, OperationMode};
pub use logging::{LogTarget, init_logging};
pub use session::{Session, SessionHolder};
