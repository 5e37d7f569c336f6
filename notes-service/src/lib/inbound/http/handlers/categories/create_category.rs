use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::CategoryRequest;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CategoryResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CategoryRequest>,
) -> Result<ApiSuccess<CategoryResponseData>, ApiError> {
    let name = body.try_into_name()?;

    state
        .category_service
        .create_category(&identity.user_id, name)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::CREATED, category.into()))
}
