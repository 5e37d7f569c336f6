use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_note_id;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::TagName;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::NoteResponseData;
use crate::inbound::http::router::AppState;

pub async fn remove_tag(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path((note_id, tag_name)): Path<(String, String)>,
) -> Result<ApiSuccess<NoteResponseData>, ApiError> {
    let note_id = parse_note_id(&note_id)?;
    let tag = TagName::new(tag_name).map_err(NoteError::from)?;

    state
        .note_service
        .remove_tag(&identity.user_id, &note_id, &tag)
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::OK, note.into()))
}
