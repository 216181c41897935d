use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::dto::products::ProductDto;
use crate::forms::products::ProductPayload;
use crate::repository::{ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(rows) => Ok(rows.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_product<R>(id: i32, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let product_id = match ProductId::new(id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_id(product_id) {
        Ok(Some(row)) => Ok(ProductDto::from(row)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Persist a new product. A store-level write failure, including a bad
/// category reference, surfaces as an internal error rather than a
/// validation error.
pub fn create_product<R>(payload: ProductPayload, repo: &R) -> ServiceResult<Product>
where
    R: ProductWriter,
{
    match repo.create_product(&payload.product) {
        Ok(product) => Ok(product),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Full-replace update. The body identifier must match the path identifier;
/// a write that touches no rows means the product no longer exists.
pub fn update_product<R>(id: i32, payload: ProductPayload, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = match payload.product_id {
        Some(product_id) if product_id.get() == id => product_id,
        _ => return Err(ServiceError::BadRequest("Product ID mismatch".to_string())),
    };

    match repo.update_product(product_id, &payload.product) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_product<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let product_id = match ProductId::new(id) {
        Ok(product_id) => product_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.delete_product(product_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Project all products whose resolved category name exactly matches. An
/// empty result set is reported as not found.
pub fn products_by_category_name<R>(name: &str, repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products_by_category_name(name) {
        Ok(rows) if rows.is_empty() => Err(ServiceError::NotFound),
        Ok(rows) => Ok(rows.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products by category name: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::product::NewProduct;
    use crate::domain::types::{CategoryId, CategoryName, ProductName, ProductPrice};
    use crate::dto::products::NO_CATEGORY;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            image_url: String::new(),
            description: String::new(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn sample_product(id: i32, category_id: Option<i32>) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(format!("Product {id}")).unwrap(),
            price: ProductPrice::new(10.0).unwrap(),
            image_url: String::new(),
            description: String::new(),
            category_id: category_id.map(|c| CategoryId::new(c).unwrap()),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn sample_payload(product_id: Option<i32>) -> ProductPayload {
        let now = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        ProductPayload {
            product_id: product_id.map(|p| ProductId::new(p).unwrap()),
            product: NewProduct {
                name: ProductName::new("Gadget").unwrap(),
                price: ProductPrice::new(42.0).unwrap(),
                image_url: String::new(),
                description: String::new(),
                category_id: None,
                created_at: now,
                updated_at: now,
            },
        }
    }

    #[test]
    fn projects_missing_categories_as_the_placeholder() {
        let repo = TestRepository::new(
            vec![sample_category(1, "Electronics")],
            vec![
                sample_product(1, Some(1)),
                // Null reference and dangling reference both lose the category.
                sample_product(2, None),
                sample_product(3, Some(999)),
            ],
        );

        let dtos = list_products(&repo).unwrap();
        assert_eq!(dtos[0].category_name, "Electronics");
        assert_eq!(dtos[1].category_name, NO_CATEGORY);
        assert_eq!(dtos[2].category_name, NO_CATEGORY);
    }

    #[test]
    fn get_product_projects_a_single_row() {
        let repo = TestRepository::new(
            vec![sample_category(1, "Electronics")],
            vec![sample_product(1, Some(1))],
        );

        let dto = get_product(1, &repo).unwrap();
        assert_eq!(dto.product_id, 1);
        assert_eq!(dto.category_name, "Electronics");

        assert!(matches!(get_product(2, &repo), Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_rejects_mismatched_identifiers() {
        let repo = TestRepository::new(vec![], vec![sample_product(5, None)]);

        let err = update_product(5, sample_payload(Some(6)), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));

        let err = update_product(5, sample_payload(None), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));
    }

    #[test]
    fn update_reports_missing_rows_as_not_found() {
        let repo = TestRepository::new(vec![], vec![]);

        let err = update_product(5, sample_payload(Some(5)), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn delete_reports_missing_rows_as_not_found() {
        let repo = TestRepository::new(vec![], vec![sample_product(1, None)]);

        assert!(delete_product(1, &repo).is_ok());
        assert!(matches!(
            delete_product(2, &repo),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn category_name_filter_reports_empty_sets_as_not_found() {
        let repo = TestRepository::new(
            vec![sample_category(1, "Electronics"), sample_category(2, "Books")],
            vec![
                sample_product(1, Some(1)),
                sample_product(2, Some(1)),
                sample_product(3, Some(2)),
            ],
        );

        let dtos = products_by_category_name("Electronics", &repo).unwrap();
        assert_eq!(
            dtos.iter().map(|d| d.product_id).collect::<Vec<_>>(),
            vec![1, 2]
        );

        assert!(matches!(
            products_by_category_name("Toys", &repo),
            Err(ServiceError::NotFound)
        ));
    }
}
