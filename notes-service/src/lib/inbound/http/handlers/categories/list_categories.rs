use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CategoryResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<CategoryResponseData>>, ApiError> {
    state
        .category_service
        .list_categories(&identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|categories| {
            let category_data: Vec<CategoryResponseData> =
                categories.iter().map(|c| c.into()).collect();
            ApiSuccess::new(StatusCode::OK, category_data)
        })
}
