use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for category operations.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn list_categories(&self, owner: &UserId) -> Result<Vec<Category>, CategoryError> {
        self.repository.list(owner).await
    }

    async fn create_category(
        &self,
        owner: &UserId,
        name: CategoryName,
    ) -> Result<Category, CategoryError> {
        let now = Utc::now();
        let category = Category {
            id: CategoryId::new(),
            user_id: *owner,
            name,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(category).await
    }

    async fn rename_category(
        &self,
        owner: &UserId,
        id: &CategoryId,
        name: CategoryName,
    ) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .find(owner, id)
            .await?
            .ok_or(CategoryError::NotFound)?;

        category.name = name;
        category.updated_at = Utc::now();

        self.repository.update(category).await
    }

    async fn delete_category(
        &self,
        owner: &UserId,
        id: &CategoryId,
    ) -> Result<(), CategoryError> {
        if self.repository.delete(owner, id).await? {
            Ok(())
        } else {
            Err(CategoryError::NotFound)
        }
    }
}
