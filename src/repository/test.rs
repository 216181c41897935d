use chrono::Utc;

use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CategoryId, CategoryName, ProductId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, ProductReader, ProductWriter};

/// Simple in-memory repository used for unit tests.
///
/// Reads mirror the SQL join semantics; writes report affected counts against
/// the seeded state without mutating it.
#[derive(Default)]
pub struct TestRepository {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Resolve the category name the way the SQL left join does: a null or
    /// dangling foreign key yields `None`.
    fn resolve_category_name(&self, product: &Product) -> Option<CategoryName> {
        product
            .category_id
            .and_then(|id| self.categories.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }

    fn get_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        Ok(self
            .categories
            .iter()
            .find(|c| c.name.as_str() == name)
            .cloned())
    }

    fn list_products_in_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect())
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        let now = Utc::now().naive_utc();
        Ok(Category {
            id: CategoryId::new(self.categories.len() as i32 + 1)?,
            name: category.name.clone(),
            image_url: category.image_url.clone(),
            description: category.description.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    fn update_category(&self, id: CategoryId, _category: &NewCategory) -> RepositoryResult<usize> {
        Ok(self.categories.iter().filter(|c| c.id == id).count())
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        Ok(self.categories.iter().filter(|c| c.id == id).count())
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self) -> RepositoryResult<Vec<(Product, Option<CategoryName>)>> {
        Ok(self
            .products
            .iter()
            .map(|p| (p.clone(), self.resolve_category_name(p)))
            .collect())
    }

    fn get_product_by_id(
        &self,
        id: ProductId,
    ) -> RepositoryResult<Option<(Product, Option<CategoryName>)>> {
        Ok(self
            .products
            .iter()
            .find(|p| p.id == id)
            .map(|p| (p.clone(), self.resolve_category_name(p))))
    }

    fn list_products_by_category_name(
        &self,
        name: &str,
    ) -> RepositoryResult<Vec<(Product, Option<CategoryName>)>> {
        Ok(self
            .products
            .iter()
            .filter_map(|p| {
                let category_name = self.resolve_category_name(p)?;
                (category_name.as_str() == name).then(|| (p.clone(), Some(category_name)))
            })
            .collect())
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        let now = Utc::now().naive_utc();
        Ok(Product {
            id: ProductId::new(self.products.len() as i32 + 1)?,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            category_id: product.category_id,
            created_at: now,
            updated_at: now,
        })
    }

    fn update_product(&self, id: ProductId, _product: &NewProduct) -> RepositoryResult<usize> {
        Ok(self.products.iter().filter(|p| p.id == id).count())
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        Ok(self.products.iter().filter(|p| p.id == id).count())
    }
}
