use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};

/// JSON body accepted by the category create/update endpoints.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    pub category_id: Option<i32>,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
}

/// Validated payload derived from a [`CategoryForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPayload {
    /// Identifier supplied in the body, if any. Updates require it to match
    /// the path; creates ignore it.
    pub category_id: Option<CategoryId>,
    pub category: NewCategory,
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category form validation failed: {0}")]
    Validation(String),
    #[error("Category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CategoryForm> for CategoryPayload {
    type Error = CategoryFormError;

    fn try_from(form: CategoryForm) -> Result<Self, Self::Error> {
        form.validate()?;
        let now = Utc::now().naive_utc();
        Ok(Self {
            category_id: form.category_id.map(CategoryId::new).transpose()?,
            category: NewCategory {
                name: CategoryName::new(form.name)?,
                image_url: form.image_url,
                description: form.description,
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
    fn accepts_a_minimal_body() {
        let form: CategoryForm = serde_json::from_str(r#"{"name":"Books"}"#).unwrap();
        let payload = CategoryPayload::try_from(form).unwrap();
        assert_eq!(payload.category_id, None);
        assert_eq!(payload.category.name.as_str(), "Books");
        assert_eq!(payload.category.image_url, "");
    }

    #[test]
    fn rejects_an_empty_name() {
        let form: CategoryForm = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(CategoryPayload::try_from(form).is_err());
    }

    #[test]
    fn carries_the_body_identifier_for_updates() {
        let form: CategoryForm =
            serde_json::from_str(r#"{"categoryId":7,"name":"Books"}"#).unwrap();
        let payload = CategoryPayload::try_from(form).unwrap();
        assert_eq!(payload.category_id.map(CategoryId::get), Some(7));
    }
}
