use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::NewProduct;
use crate::domain::types::{
    CategoryId, ProductId, ProductName, ProductPrice, TypeConstraintError,
};

/// JSON body accepted by the product create/update endpoints.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub product_id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    pub category_id: Option<i32>,
}

/// Validated payload derived from a [`ProductForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    /// Identifier supplied in the body, if any. Updates require it to match
    /// the path; creates ignore it.
    pub product_id: Option<ProductId>,
    pub product: NewProduct,
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form validation failed: {0}")]
    Validation(String),
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ProductForm> for ProductPayload {
    type Error = ProductFormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let now = Utc::now().naive_utc();
        Ok(Self {
            product_id: form.product_id.map(ProductId::new).transpose()?,
            product: NewProduct {
                name: ProductName::new(form.name)?,
                price: ProductPrice::new(form.price)?,
                image_url: form.image_url,
                description: form.description,
                category_id: form.category_id.map(CategoryId::new).transpose()?,
                created_at: now,
                updated_at: now,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_body_without_identifiers() {
        let form: ProductForm =
            serde_json::from_str(r#"{"name":"Novel","price":20.0}"#).unwrap();
        let payload = ProductPayload::try_from(form).unwrap();
        assert_eq!(payload.product_id, None);
        assert_eq!(payload.product.category_id, None);
        assert_eq!(payload.product.price.get(), 20.0);
    }

    #[test]
    fn rejects_a_negative_price() {
        let form: ProductForm =
            serde_json::from_str(r#"{"name":"Novel","price":-1.0}"#).unwrap();
        assert!(ProductPayload::try_from(form).is_err());
    }

    #[test]
    fn carries_body_identifiers() {
        let form: ProductForm = serde_json::from_str(
            r#"{"productId":5,"name":"Novel","price":20.0,"categoryId":2}"#,
        )
        .unwrap();
        let payload = ProductPayload::try_from(form).unwrap();
        assert_eq!(payload.product_id.map(ProductId::get), Some(5));
        assert_eq!(payload.product.category_id.map(CategoryId::get), Some(2));
    }
}
