use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_account(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete_account(&identity).await?;

    Ok(StatusCode::NO_CONTENT)
}
