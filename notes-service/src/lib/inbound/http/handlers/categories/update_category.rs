use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_category_id;
use super::CategoryRequest;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CategoryResponseData;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(category_id): Path<String>,
    ApiJson(body): ApiJson<CategoryRequest>,
) -> Result<ApiSuccess<CategoryResponseData>, ApiError> {
    let category_id = parse_category_id(&category_id)?;
    let name = body.try_into_name()?;

    state
        .category_service
        .rename_category(&identity.user_id, &category_id, name)
        .await
        .map_err(ApiError::from)
        .map(|ref category| ApiSuccess::new(StatusCode::OK, category.into()))
}
