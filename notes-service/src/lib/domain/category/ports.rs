use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::user::models::UserId;

/// Port for category operations, always scoped to the owning user.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// List the owner's categories, ordered by name.
    async fn list_categories(&self, owner: &UserId) -> Result<Vec<Category>, CategoryError>;

    /// Create a category for the owner.
    async fn create_category(
        &self,
        owner: &UserId,
        name: CategoryName,
    ) -> Result<Category, CategoryError>;

    /// Rename one of the owner's categories.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist or belongs to another user
    async fn rename_category(
        &self,
        owner: &UserId,
        id: &CategoryId,
        name: CategoryName,
    ) -> Result<Category, CategoryError>;

    /// Delete one of the owner's categories. Notes in it become uncategorized.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist or belongs to another user
    async fn delete_category(&self, owner: &UserId, id: &CategoryId)
        -> Result<(), CategoryError>;
}

/// Persistence operations for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    async fn create(&self, category: Category) -> Result<Category, CategoryError>;

    /// Retrieve a category if it belongs to `owner`.
    async fn find(
        &self,
        owner: &UserId,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryError>;

    async fn list(&self, owner: &UserId) -> Result<Vec<Category>, CategoryError>;

    /// Persist name and timestamp changes.
    ///
    /// # Errors
    /// * `NotFound` - No such category for this owner
    async fn update(&self, category: Category) -> Result<Category, CategoryError>;

    /// Returns whether a row was deleted.
    async fn delete(&self, owner: &UserId, id: &CategoryId) -> Result<bool, CategoryError>;
}
