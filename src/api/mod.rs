//! HTTP API module for the Rate Plan Engine.
//!
//! This module exposes the duplicate scan, candidate duplicate check and
//! availability dip detector as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DipRequest, DuplicateCheckRequest, DuplicateScanRequest};
pub use response::{ApiError, DipResponse};
pub use state::AppState;
