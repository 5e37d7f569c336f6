use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::parse_category_id;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::NoteFilter;
use crate::domain::note::models::TagName;
use crate::domain::user::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::NoteResponseData;
use crate::inbound::http::router::AppState;

/// Empty query values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct NoteQuery {
    search: Option<String>,
    category_id: Option<String>,
    tag: Option<String>,
}

impl NoteQuery {
    fn try_into_filter(self) -> Result<NoteFilter, ApiError> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let category_id = match present(self.category_id) {
            Some(raw) => Some(parse_category_id(&raw)?),
            None => None,
        };

        let tag = match present(self.tag) {
            Some(raw) => Some(TagName::new(raw).map_err(NoteError::from)?),
            None => None,
        };

        Ok(NoteFilter {
            search: present(self.search),
            category_id,
            tag,
        })
    }
}

pub async fn list_notes(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Query(params): Query<NoteQuery>,
) -> Result<ApiSuccess<Vec<NoteResponseData>>, ApiError> {
    let filter = params.try_into_filter()?;

    state
        .note_service
        .list_notes(&identity.user_id, filter)
        .await
        .map_err(ApiError::from)
        .map(|notes| {
            let note_data: Vec<NoteResponseData> = notes.iter().map(|n| n.into()).collect();
            ApiSuccess::new(StatusCode::OK, note_data)
        })
}
