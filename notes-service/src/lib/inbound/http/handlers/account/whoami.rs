use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedUser;
use crate::domain::user::models::UserProfile;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Profile of the caller. A valid token whose user has since been deleted
/// resolves to 401.
pub async fn whoami(
    State(state): State<AppState>,
    identity: Option<Extension<AuthenticatedUser>>,
) -> Result<ApiSuccess<WhoamiResponseData>, ApiError> {
    let identity = identity.map(|Extension(identity)| identity);

    state
        .user_service
        .current_user(identity.as_ref())
        .await?
        .ok_or_else(|| ApiError::from(UserError::UserNotFound))
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhoamiResponseData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&UserProfile> for WhoamiResponseData {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            email: profile.email.as_str().to_string(),
            created_at: profile.created_at,
        }
    }
}
