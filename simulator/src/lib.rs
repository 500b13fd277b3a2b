//! In-memory stand-in for the public deck service.
//!
//! Serves the same wire format over the same routes, so the client cannot
//! tell it apart from the real thing. Runs standalone as a binary and backs
//! the client's integration tests.

mod api;
pub use api::Api;

mod state;
pub use state::Simulator;
