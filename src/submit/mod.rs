//! IndexNow submission
//!
//! Fans one payload out to every configured provider concurrently and
//! aggregates per-provider outcomes without letting any provider's failure
//! affect another's.

mod engine;

pub use engine::{DEFAULT_PROVIDERS, IndexNowClient};
