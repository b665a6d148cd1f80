//! HTTP routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use lilly_signature_core::Email;

use crate::error::{AppError, Result};
use crate::graph::DirectoryProfile;
use crate::state::AppState;

/// Query parameters for the profile endpoint.
#[derive(Debug, Deserialize)]
pub struct SignatureQuery {
    email: Option<String>,
}

/// Build the service router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/signature", get(signature))
}

/// `GET /signature?email=<address>` - directory profile for one user.
///
/// The resolver calls this on a full cache miss and maps the response into
/// its signature profile.
async fn signature(
    State(state): State<AppState>,
    Query(query): Query<SignatureQuery>,
) -> Result<Json<DirectoryProfile>> {
    let raw = query
        .email
        .ok_or_else(|| AppError::BadRequest("missing email parameter".to_string()))?;

    let email = Email::parse(&raw)
        .map_err(|e| AppError::BadRequest(format!("invalid email parameter: {e}")))?;

    let profile = state.graph().user_profile(email.as_str()).await?;
    Ok(Json(profile))
}
