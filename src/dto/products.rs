use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::CategoryName;

/// Placeholder reported when a product's category reference is null or
/// cannot be resolved.
pub const NO_CATEGORY: &str = "No Category";

/// API-facing projection of a product joined with its category.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    pub description: String,
    pub category_name: String,
}

impl From<(Product, Option<CategoryName>)> for ProductDto {
    fn from((product, category_name): (Product, Option<CategoryName>)) -> Self {
        Self {
            product_id: product.id.get(),
            name: product.name.into_inner(),
            price: product.price.get(),
            image_url: product.image_url,
            description: product.description,
            category_name: category_name
                .map(CategoryName::into_inner)
                .unwrap_or_else(|| NO_CATEGORY.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ProductId, ProductName, ProductPrice};
    use chrono::DateTime;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1).unwrap(),
            name: ProductName::new("Smartphone").unwrap(),
            price: ProductPrice::new(500.0).unwrap(),
            image_url: "https://example.com/images/smartphone.png".into(),
            description: "Latest model".into(),
            category_id: None,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn substitutes_placeholder_when_category_is_missing() {
        let dto = ProductDto::from((sample_product(), None));
        assert_eq!(dto.category_name, NO_CATEGORY);
    }

    #[test]
    fn uses_the_resolved_category_name() {
        let name = CategoryName::new("Electronics").unwrap();
        let dto = ProductDto::from((sample_product(), Some(name)));
        assert_eq!(dto.category_name, "Electronics");
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let dto = ProductDto::from((sample_product(), None));
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["productId"], 1);
        assert_eq!(value["categoryName"], NO_CATEGORY);
        assert!(value.get("imageUrl").is_some());
    }
}
