//! Service identity endpoint.

use axum::Json;
use serde::Serialize;

use crate::config::SERVICE_NAME;

/// Body of the identity response. Field order matters: consumers of the demo
/// compare raw bytes, so `service` must serialize before `status`.
#[derive(Debug, Serialize)]
pub struct ServiceIdentity {
    service: &'static str,
    status: &'static str,
}

/// Root handler reporting which service this is and that it is running.
pub async fn identity() -> Json<ServiceIdentity> {
    Json(ServiceIdentity {
        service: SERVICE_NAME,
        status: "running",
    })
}
