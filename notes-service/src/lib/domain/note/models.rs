use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::note::errors::NoteContentError;
use crate::domain::note::errors::NoteIdError;
use crate::domain::note::errors::NoteTitleError;
use crate::domain::note::errors::TagNameError;
use crate::domain::user::models::UserId;

/// Note unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Generate a new random note ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a note ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, NoteIdError> {
        Uuid::parse_str(s)
            .map(NoteId)
            .map_err(|e| NoteIdError::InvalidFormat(e.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Note title value type.
///
/// Non-blank, at most 512 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTitle(String);

impl NoteTitle {
    const MAX_LENGTH: usize = 512;

    /// Create a new valid title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace
    /// * `TooLong` - Title is longer than 512 characters
    pub fn new(title: String) -> Result<Self, NoteTitleError> {
        let length = title.chars().count();

        if title.trim().is_empty() {
            Err(NoteTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(NoteTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Note body value type. Any non-empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContent(String);

impl NoteContent {
    pub fn new(content: String) -> Result<Self, NoteContentError> {
        if content.is_empty() {
            Err(NoteContentError::Empty)
        } else {
            Ok(Self(content))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tag unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub Uuid);

impl TagId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TagId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tag name value type.
///
/// Trimmed, non-empty, at most 64 characters. Tag names are global: the same
/// name always refers to the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String);

impl TagName {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid tag name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace
    /// * `TooLong` - Name is longer than 64 characters
    pub fn new(name: String) -> Result<Self, TagNameError> {
        let name = name.trim();
        let length = name.chars().count();

        if length == 0 {
            Err(TagNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TagNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tag entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

/// Category reference embedded in a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCategory {
    pub id: CategoryId,
    pub name: CategoryName,
}

/// Note aggregate entity.
///
/// `tags` is kept sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub user_id: UserId,
    pub title: NoteTitle,
    pub content: NoteContent,
    pub category: Option<NoteCategory>,
    pub tags: Vec<TagName>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Replace the tag set, normalizing order and duplicates.
    pub fn set_tags(&mut self, tags: Vec<TagName>) {
        self.tags = normalize_tags(tags);
    }

    /// Attach a tag. Returns false if it was already attached.
    pub fn add_tag(&mut self, tag: TagName) -> bool {
        match self.tags.binary_search(&tag) {
            Ok(_) => false,
            Err(position) => {
                self.tags.insert(position, tag);
                true
            }
        }
    }

    /// Detach a tag. Returns false if it was not attached.
    pub fn remove_tag(&mut self, tag: &TagName) -> bool {
        match self.tags.binary_search(tag) {
            Ok(position) => {
                self.tags.remove(position);
                true
            }
            Err(_) => false,
        }
    }
}

pub fn normalize_tags(mut tags: Vec<TagName>) -> Vec<TagName> {
    tags.sort();
    tags.dedup();
    tags
}

/// Filters for listing notes. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-insensitive substring of title or content
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
    pub tag: Option<TagName>,
}

/// Command to create a note with domain types
#[derive(Debug)]
pub struct CreateNoteCommand {
    pub title: NoteTitle,
    pub content: NoteContent,
    pub category_id: Option<CategoryId>,
    pub tags: Vec<TagName>,
}

/// Command to update a note.
///
/// Only provided fields change. `category_id: Some(None)` clears the category
/// and `tags: Some(..)` replaces the whole tag set.
#[derive(Debug, Default)]
pub struct UpdateNoteCommand {
    pub title: Option<NoteTitle>,
    pub content: Option<NoteContent>,
    pub category_id: Option<Option<CategoryId>>,
    pub tags: Option<Vec<TagName>>,
}
