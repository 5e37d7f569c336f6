use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::normalize_tags;
use crate::domain::note::models::CreateNoteCommand;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteCategory;
use crate::domain::note::models::NoteFilter;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::Tag;
use crate::domain::note::models::TagName;
use crate::domain::note::models::UpdateNoteCommand;
use crate::domain::note::ports::NoteRepository;
use crate::domain::note::ports::NoteServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for notes and tags.
pub struct NoteService<NR, CR>
where
    NR: NoteRepository,
    CR: CategoryRepository,
{
    notes: Arc<NR>,
    categories: Arc<CR>,
}

impl<NR, CR> NoteService<NR, CR>
where
    NR: NoteRepository,
    CR: CategoryRepository,
{
    /// Create a new note service.
    ///
    /// # Arguments
    /// * `notes` - Note persistence implementation
    /// * `categories` - Category lookup, used to check ownership of referenced categories
    pub fn new(notes: Arc<NR>, categories: Arc<CR>) -> Self {
        Self { notes, categories }
    }

    async fn resolve_category(
        &self,
        owner: &UserId,
        id: Option<CategoryId>,
    ) -> Result<Option<NoteCategory>, NoteError> {
        let Some(id) = id else {
            return Ok(None);
        };

        let category = self
            .categories
            .find(owner, &id)
            .await?
            .ok_or(NoteError::CategoryNotFound)?;

        Ok(Some(NoteCategory {
            id: category.id,
            name: category.name,
        }))
    }

    async fn owned_note(&self, owner: &UserId, id: &NoteId) -> Result<Note, NoteError> {
        self.notes
            .find(owner, id)
            .await?
            .ok_or(NoteError::NotFound)
    }
}

#[async_trait]
impl<NR, CR> NoteServicePort for NoteService<NR, CR>
where
    NR: NoteRepository,
    CR: CategoryRepository,
{
    async fn create_note(
        &self,
        owner: &UserId,
        command: CreateNoteCommand,
    ) -> Result<Note, NoteError> {
        let category = self.resolve_category(owner, command.category_id).await?;
        let now = Utc::now();

        let note = Note {
            id: NoteId::new(),
            user_id: *owner,
            title: command.title,
            content: command.content,
            category,
            tags: normalize_tags(command.tags),
            created_at: now,
            updated_at: now,
        };

        let created = self.notes.create(note).await?;
        tracing::debug!(note_id = %created.id, user_id = %owner, "Note created");

        Ok(created)
    }

    async fn list_notes(
        &self,
        owner: &UserId,
        filter: NoteFilter,
    ) -> Result<Vec<Note>, NoteError> {
        self.notes.list(owner, &filter).await
    }

    async fn get_note(&self, owner: &UserId, id: &NoteId) -> Result<Note, NoteError> {
        self.owned_note(owner, id).await
    }

    async fn update_note(
        &self,
        owner: &UserId,
        id: &NoteId,
        command: UpdateNoteCommand,
    ) -> Result<Note, NoteError> {
        let mut note = self.owned_note(owner, id).await?;

        if let Some(title) = command.title {
            note.title = title;
        }

        if let Some(content) = command.content {
            note.content = content;
        }

        if let Some(category_id) = command.category_id {
            note.category = self.resolve_category(owner, category_id).await?;
        }

        if let Some(tags) = command.tags {
            note.set_tags(tags);
        }

        note.updated_at = Utc::now();

        self.notes.update(note).await
    }

    async fn delete_note(&self, owner: &UserId, id: &NoteId) -> Result<(), NoteError> {
        if self.notes.delete(owner, id).await? {
            tracing::debug!(note_id = %id, user_id = %owner, "Note deleted");
            Ok(())
        } else {
            Err(NoteError::NotFound)
        }
    }

    async fn add_tag(
        &self,
        owner: &UserId,
        id: &NoteId,
        tag: TagName,
    ) -> Result<Note, NoteError> {
        let mut note = self.owned_note(owner, id).await?;

        if !note.add_tag(tag) {
            return Ok(note);
        }

        note.updated_at = Utc::now();
        self.notes.update(note).await
    }

    async fn remove_tag(
        &self,
        owner: &UserId,
        id: &NoteId,
        tag: &TagName,
    ) -> Result<Note, NoteError> {
        let mut note = self.owned_note(owner, id).await?;

        if !note.remove_tag(tag) {
            return Ok(note);
        }

        note.updated_at = Utc::now();
        self.notes.update(note).await
    }

    async fn list_tags(&self, owner: &UserId) -> Result<Vec<Tag>, NoteError> {
        self.notes.list_tags(owner).await
    }
}
