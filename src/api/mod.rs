//! API layer module.
//!
//! HTTP handlers and routing for the business identifier worker.

pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
