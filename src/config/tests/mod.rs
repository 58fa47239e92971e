//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence and real loading
//! - `validation`: Gateway settings validation

mod helpers;
