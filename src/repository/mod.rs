use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CategoryId, CategoryName, ProductId};
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Exact-match lookup by name. Returns the lowest-id match when names
    /// are duplicated.
    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
    /// List products whose foreign key points at the given category.
    fn list_products_in_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored row.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Replace all mutable fields of a category. Returns affected row count.
    fn update_category(&self, id: CategoryId, category: &NewCategory) -> RepositoryResult<usize>;
    /// Delete a category by id. Products keep their (now dangling) reference.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for product entities.
///
/// Every read joins the related category explicitly so that the "category
/// missing" branch is a visible code path, not an ORM side effect. The second
/// tuple element is the resolved category name, `None` when the foreign key is
/// null or dangling.
pub trait ProductReader {
    /// List all products with their resolved category names.
    fn list_products(&self) -> RepositoryResult<Vec<(Product, Option<CategoryName>)>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(
        &self,
        id: ProductId,
    ) -> RepositoryResult<Option<(Product, Option<CategoryName>)>>;
    /// List products whose resolved category name exactly matches.
    fn list_products_by_category_name(
        &self,
        name: &str,
    ) -> RepositoryResult<Vec<(Product, Option<CategoryName>)>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product and return the stored row.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Replace all mutable fields of a product. Returns affected row count.
    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<usize>;
    /// Delete a product by id. Returns affected row count.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
