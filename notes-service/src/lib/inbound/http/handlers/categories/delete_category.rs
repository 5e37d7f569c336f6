use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_category_id;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_category(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(category_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let category_id = parse_category_id(&category_id)?;

    state
        .category_service
        .delete_category(&identity.user_id, &category_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
