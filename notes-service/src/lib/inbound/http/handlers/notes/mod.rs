pub mod add_tag;
pub mod create_note;
pub mod delete_note;
pub mod get_note;
pub mod list_notes;
pub mod list_tags;
pub mod remove_tag;
pub mod update_note;

pub use add_tag::add_tag;
pub use create_note::create_note;
pub use delete_note::delete_note;
pub use get_note::get_note;
pub use list_notes::list_notes;
pub use list_tags::list_tags;
pub use remove_tag::remove_tag;
pub use update_note::update_note;

use crate::domain::category::models::CategoryId;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::TagName;
use crate::inbound::http::handlers::ApiError;

fn parse_note_id(raw: &str) -> Result<NoteId, ApiError> {
    NoteId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn parse_category_id(raw: &str) -> Result<CategoryId, ApiError> {
    CategoryId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn parse_tags(raw: Vec<String>) -> Result<Vec<TagName>, ApiError> {
    raw.into_iter()
        .map(|name| TagName::new(name).map_err(|e| NoteError::from(e).into()))
        .collect()
}
