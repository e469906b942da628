//! python-api: a minimal HTTP service stub.
//!
//! Exposes a liveness probe at `/health`, a service identity payload at `/`,
//! and a JSON 404 for everything else. Exists as the smallest possible
//! well-behaved HTTP citizen for orchestration demos.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
