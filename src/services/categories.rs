use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::types::CategoryId;
use crate::forms::categories::CategoryPayload;
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_category<R>(id: i32, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    let category_id = match CategoryId::new(id) {
        Ok(category_id) => category_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Persist a new category. Any identifier supplied in the body is ignored;
/// the store assigns one.
pub fn create_category<R>(payload: CategoryPayload, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    match repo.create_category(&payload.category) {
        Ok(category) => Ok(category),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Full-replace update. The body identifier must match the path identifier.
pub fn update_category<R>(id: i32, payload: CategoryPayload, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id = match payload.category_id {
        Some(category_id) if category_id.get() == id => category_id,
        _ => return Err(ServiceError::BadRequest("Category ID mismatch".to_string())),
    };

    match repo.update_category(category_id, &payload.category) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_category<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let category_id = match CategoryId::new(id) {
        Ok(category_id) => category_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.delete_category(category_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Exact-match lookup by category name, returning the raw products of the
/// first matching category. An existing category with no products yields an
/// empty list, not an error.
pub fn products_by_category_name<R>(name: &str, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: CategoryReader,
{
    let category = match repo.get_category_by_name(name) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category by name: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.list_products_in_category(category.id) {
        Ok(products) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products in category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
