use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Deserializer;

use super::parse_category_id;
use super::parse_note_id;
use super::parse_tags;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::NoteContent;
use crate::domain::note::models::NoteTitle;
use crate::domain::note::models::UpdateNoteCommand;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::NoteResponseData;
use crate::inbound::http::router::AppState;

pub async fn update_note(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(note_id): Path<String>,
    ApiJson(body): ApiJson<UpdateNoteRequest>,
) -> Result<ApiSuccess<NoteResponseData>, ApiError> {
    let note_id = parse_note_id(&note_id)?;

    state
        .note_service
        .update_note(&identity.user_id, &note_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::OK, note.into()))
}

/// Partial update. `"category_id": null` clears the category while an absent
/// `category_id` leaves it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateNoteRequest {
    title: Option<String>,
    content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    category_id: Option<Option<String>>,
    tags: Option<Vec<String>>,
}

fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UpdateNoteRequest {
    fn try_into_command(self) -> Result<UpdateNoteCommand, ApiError> {
        let title = self
            .title
            .map(NoteTitle::new)
            .transpose()
            .map_err(NoteError::from)?;
        let content = self
            .content
            .map(NoteContent::new)
            .transpose()
            .map_err(NoteError::from)?;
        let category_id = match self.category_id {
            Some(Some(raw)) => Some(Some(parse_category_id(&raw)?)),
            Some(None) => Some(None),
            None => None,
        };
        let tags = self.tags.map(parse_tags).transpose()?;

        Ok(UpdateNoteCommand {
            title,
            content,
            category_id,
            tags,
        })
    }
}
