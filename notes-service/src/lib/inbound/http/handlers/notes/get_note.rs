use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_note_id;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::NoteResponseData;
use crate::inbound::http::router::AppState;

pub async fn get_note(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(note_id): Path<String>,
) -> Result<ApiSuccess<NoteResponseData>, ApiError> {
    let note_id = parse_note_id(&note_id)?;

    state
        .note_service
        .get_note(&identity.user_id, &note_id)
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::OK, note.into()))
}
