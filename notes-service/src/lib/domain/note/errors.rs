use thiserror::Error;

use crate::domain::category::errors::CategoryError;

/// Error for NoteId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for NoteTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteTitleError {
    #[error("Title and content required")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for NoteContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteContentError {
    #[error("Title and content required")]
    Empty,
}

/// Error for TagName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagNameError {
    #[error("Tag name required")]
    Empty,

    #[error("Tag name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for note and tag operations
#[derive(Debug, Clone, Error)]
pub enum NoteError {
    #[error("Invalid note ID: {0}")]
    InvalidNoteId(#[from] NoteIdError),

    #[error("{0}")]
    InvalidTitle(#[from] NoteTitleError),

    #[error("{0}")]
    InvalidContent(#[from] NoteContentError),

    #[error("{0}")]
    InvalidTag(#[from] TagNameError),

    #[error("Note not found")]
    NotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<CategoryError> for NoteError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound => NoteError::CategoryNotFound,
            CategoryError::DatabaseError(msg) => NoteError::DatabaseError(msg),
            other => NoteError::Unknown(other.to_string()),
        }
    }
}
