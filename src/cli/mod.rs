//! CLI commands
//!
//! Command implementations for the `reindex` binary.

mod auth;
mod prompt;
mod run;
mod style;
mod submit;

pub use auth::{run_auth_setup, run_auth_test};
pub use run::run_reconcile;
pub use submit::run_submit;
