use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;
use sqlx::Transaction;
use uuid::Uuid;

use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteCategory;
use crate::domain::note::models::NoteContent;
use crate::domain::note::models::NoteFilter;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::NoteTitle;
use crate::domain::note::models::Tag;
use crate::domain::note::models::TagId;
use crate::domain::note::models::TagName;
use crate::domain::note::ports::NoteRepository;
use crate::domain::user::models::UserId;

const SELECT_NOTES: &str = r#"
    SELECT n.id, n.user_id, n.title, n.content, n.category_id,
           c.name AS category_name, n.created_at, n.updated_at
    FROM notes n
    LEFT JOIN categories c ON c.id = n.category_id
    WHERE n.user_id = "#;

/// PostgreSQL implementation of NoteRepository.
///
/// Tags live in a global `tags` table and are linked through `note_tags`.
/// Writes touching a note and its links run in one transaction.
pub struct PostgresNoteRepository {
    pool: PgPool,
}

impl PostgresNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_tags(&self, note_ids: Vec<Uuid>) -> Result<HashMap<Uuid, Vec<TagName>>, NoteError> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT nt.note_id, t.name
            FROM note_tags nt
            JOIN tags t ON t.id = nt.tag_id
            WHERE nt.note_id = ANY($1)
            ORDER BY t.name ASC
            "#,
        )
        .bind(note_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let mut tags: HashMap<Uuid, Vec<TagName>> = HashMap::new();
        for (note_id, name) in rows {
            tags.entry(note_id).or_default().push(TagName::new(name)?);
        }

        Ok(tags)
    }

    async fn with_tags(&self, rows: Vec<NoteRow>) -> Result<Vec<Note>, NoteError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut tags = self.load_tags(rows.iter().map(|r| r.id).collect()).await?;

        rows.into_iter()
            .map(|row| {
                let note_tags = tags.remove(&row.id).unwrap_or_default();
                row.into_note(note_tags)
            })
            .collect()
    }
}

#[derive(Debug, FromRow)]
struct NoteRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    content: String,
    category_id: Option<Uuid>,
    category_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self, tags: Vec<TagName>) -> Result<Note, NoteError> {
        let category = match (self.category_id, self.category_name) {
            (Some(id), Some(name)) => Some(NoteCategory {
                id: CategoryId(id),
                name: CategoryName::new(name).map_err(|e| NoteError::Unknown(e.to_string()))?,
            }),
            _ => None,
        };

        Ok(Note {
            id: NoteId(self.id),
            user_id: UserId(self.user_id),
            title: NoteTitle::new(self.title)?,
            content: NoteContent::new(self.content)?,
            category,
            tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> NoteError {
    NoteError::DatabaseError(e.to_string())
}

fn write_error(e: sqlx::Error) -> NoteError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation()
            && db_err.constraint() == Some("notes_category_id_fkey")
        {
            return NoteError::CategoryNotFound;
        }
    }
    database_error(e)
}

/// Escape LIKE wildcards so the search term matches literally.
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

async fn replace_tags(
    tx: &mut Transaction<'_, Postgres>,
    note_id: Uuid,
    tags: &[TagName],
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM note_tags WHERE note_id = $1")
        .bind(note_id)
        .execute(&mut **tx)
        .await?;

    for tag in tags {
        // Find-or-create; the no-op update makes RETURNING yield the existing id.
        let tag_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO tags (id, name)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tag.as_str())
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO note_tags (note_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(note_id)
        .bind(tag_id)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn create(&self, note: Note) -> Result<Note, NoteError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query(
            r#"
            INSERT INTO notes (id, user_id, category_id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(note.id.0)
        .bind(note.user_id.0)
        .bind(note.category.as_ref().map(|c| c.id.0))
        .bind(note.title.as_str())
        .bind(note.content.as_str())
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(write_error)?;

        replace_tags(&mut tx, note.id.0, &note.tags)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(note)
    }

    async fn find(&self, owner: &UserId, id: &NoteId) -> Result<Option<Note>, NoteError> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_NOTES);
        query.push_bind(owner.0).push(" AND n.id = ").push_bind(id.0);

        let rows = query
            .build_query_as::<NoteRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(self.with_tags(rows).await?.into_iter().next())
    }

    async fn list(&self, owner: &UserId, filter: &NoteFilter) -> Result<Vec<Note>, NoteError> {
        let mut query = QueryBuilder::<Postgres>::new(SELECT_NOTES);
        query.push_bind(owner.0);

        if let Some(category_id) = &filter.category_id {
            query.push(" AND n.category_id = ").push_bind(category_id.0);
        }

        if let Some(search) = &filter.search {
            let pattern = like_pattern(search);
            query
                .push(" AND (n.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR n.content ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(tag) = &filter.tag {
            query
                .push(
                    " AND EXISTS (SELECT 1 FROM note_tags nt JOIN tags t ON t.id = nt.tag_id \
                     WHERE nt.note_id = n.id AND t.name = ",
                )
                .push_bind(tag.as_str().to_string())
                .push(")");
        }

        query.push(" ORDER BY n.updated_at DESC");

        let rows = query
            .build_query_as::<NoteRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        self.with_tags(rows).await
    }

    async fn update(&self, note: Note) -> Result<Note, NoteError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let result = sqlx::query(
            r#"
            UPDATE notes
            SET title = $3, content = $4, category_id = $5, updated_at = $6
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(note.id.0)
        .bind(note.user_id.0)
        .bind(note.title.as_str())
        .bind(note.content.as_str())
        .bind(note.category.as_ref().map(|c| c.id.0))
        .bind(note.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(NoteError::NotFound);
        }

        replace_tags(&mut tx, note.id.0, &note.tags)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(note)
    }

    async fn delete(&self, owner: &UserId, id: &NoteId) -> Result<bool, NoteError> {
        let result = sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_tags(&self, owner: &UserId) -> Result<Vec<Tag>, NoteError> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT DISTINCT t.id, t.name
            FROM tags t
            JOIN note_tags nt ON nt.tag_id = t.id
            JOIN notes n ON n.id = nt.note_id
            WHERE n.user_id = $1
            ORDER BY t.name ASC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter()
            .map(|(id, name)| {
                Ok(Tag {
                    id: TagId(id),
                    name: TagName::new(name)?,
                })
            })
            .collect()
    }
}
