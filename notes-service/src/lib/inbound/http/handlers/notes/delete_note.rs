use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_note_id;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub async fn delete_note(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(note_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let note_id = parse_note_id(&note_id)?;

    state
        .note_service
        .delete_note(&identity.user_id, &note_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
