use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::parse_category_id;
use super::parse_tags;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::CreateNoteCommand;
use crate::domain::note::models::NoteContent;
use crate::domain::note::models::NoteTitle;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::NoteResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_note(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateNoteRequest>,
) -> Result<ApiSuccess<NoteResponseData>, ApiError> {
    state
        .note_service
        .create_note(&identity.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::CREATED, note.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateNoteRequest {
    title: Option<String>,
    content: Option<String>,
    category_id: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl CreateNoteRequest {
    fn try_into_command(self) -> Result<CreateNoteCommand, ApiError> {
        let title = NoteTitle::new(self.title.unwrap_or_default()).map_err(NoteError::from)?;
        let content =
            NoteContent::new(self.content.unwrap_or_default()).map_err(NoteError::from)?;
        let category_id = self
            .category_id
            .as_deref()
            .map(parse_category_id)
            .transpose()?;

        Ok(CreateNoteCommand {
            title,
            content,
            category_id,
            tags: parse_tags(self.tags)?,
        })
    }
}
