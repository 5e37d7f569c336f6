use async_trait::async_trait;

use crate::domain::note::errors::NoteError;
use crate::domain::note::models::CreateNoteCommand;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteFilter;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::Tag;
use crate::domain::note::models::TagName;
use crate::domain::note::models::UpdateNoteCommand;
use crate::domain::user::models::UserId;

/// Port for note and tag operations, always scoped to the owning user.
#[async_trait]
pub trait NoteServicePort: Send + Sync + 'static {
    /// Create a note for the owner.
    ///
    /// # Errors
    /// * `CategoryNotFound` - Category does not belong to the owner
    /// * `DatabaseError` - Database operation failed
    async fn create_note(&self, owner: &UserId, command: CreateNoteCommand)
        -> Result<Note, NoteError>;

    /// List the owner's notes, most recently updated first.
    async fn list_notes(&self, owner: &UserId, filter: NoteFilter)
        -> Result<Vec<Note>, NoteError>;

    /// # Errors
    /// * `NotFound` - Note does not exist or belongs to another user
    async fn get_note(&self, owner: &UserId, id: &NoteId) -> Result<Note, NoteError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - Note does not exist or belongs to another user
    /// * `CategoryNotFound` - New category does not belong to the owner
    async fn update_note(
        &self,
        owner: &UserId,
        id: &NoteId,
        command: UpdateNoteCommand,
    ) -> Result<Note, NoteError>;

    /// # Errors
    /// * `NotFound` - Note does not exist or belongs to another user
    async fn delete_note(&self, owner: &UserId, id: &NoteId) -> Result<(), NoteError>;

    /// Attach a tag to a note, creating the tag if needed. Idempotent.
    async fn add_tag(&self, owner: &UserId, id: &NoteId, tag: TagName)
        -> Result<Note, NoteError>;

    /// Detach a tag from a note. Detaching an absent tag is a no-op.
    async fn remove_tag(
        &self,
        owner: &UserId,
        id: &NoteId,
        tag: &TagName,
    ) -> Result<Note, NoteError>;

    /// Distinct tags used on the owner's notes, ordered by name.
    async fn list_tags(&self, owner: &UserId) -> Result<Vec<Tag>, NoteError>;
}

/// Persistence operations for notes and their tag links.
#[async_trait]
pub trait NoteRepository: Send + Sync + 'static {
    /// Persist a new note and link its tags, creating missing tags.
    async fn create(&self, note: Note) -> Result<Note, NoteError>;

    /// Retrieve a note if it belongs to `owner`.
    async fn find(&self, owner: &UserId, id: &NoteId) -> Result<Option<Note>, NoteError>;

    /// Retrieve the owner's notes matching `filter`, ordered by `updated_at` descending.
    async fn list(&self, owner: &UserId, filter: &NoteFilter) -> Result<Vec<Note>, NoteError>;

    /// Persist all fields and replace the tag links with `note.tags`.
    ///
    /// # Errors
    /// * `NotFound` - No such note for this owner
    async fn update(&self, note: Note) -> Result<Note, NoteError>;

    /// Returns whether a row was deleted.
    async fn delete(&self, owner: &UserId, id: &NoteId) -> Result<bool, NoteError>;

    async fn list_tags(&self, owner: &UserId) -> Result<Vec<Tag>, NoteError>;
}
