//! HTTP server for the portfolio daemon.
//!
//! Provides a REST API for:
//! - Service information at `/`
//! - Listing, reading, creating, updating and deleting projects

mod error;
mod http;
pub mod state;

pub use error::ApiError;
pub use http::{create_router, API_NAME, API_VERSION};
pub use state::AppState;
