//! Root route handler.

use axum::Json;

use notes_core::api::ServiceBanner;

/// Handler for GET /
///
/// Lists the available endpoints.
pub async fn banner() -> Json<ServiceBanner> {
    Json(ServiceBanner::default())
}
