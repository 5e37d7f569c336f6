use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TagResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_tags(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TagResponseData>>, ApiError> {
    state
        .note_service
        .list_tags(&identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|tags| {
            let tag_data: Vec<TagResponseData> = tags.iter().map(|t| t.into()).collect();
            ApiSuccess::new(StatusCode::OK, tag_data)
        })
}
