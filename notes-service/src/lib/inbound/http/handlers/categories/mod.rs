pub mod create_category;
pub mod delete_category;
pub mod list_categories;
pub mod update_category;

pub use create_category::create_category;
pub use delete_category::delete_category;
pub use list_categories::list_categories;
pub use update_category::update_category;

use serde::Deserialize;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::inbound::http::handlers::ApiError;

/// Body shared by create and rename.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRequest {
    name: Option<String>,
}

impl CategoryRequest {
    fn try_into_name(self) -> Result<CategoryName, CategoryError> {
        Ok(CategoryName::new(self.name.unwrap_or_default())?)
    }
}

fn parse_category_id(raw: &str) -> Result<CategoryId, ApiError> {
    CategoryId::from_string(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}
