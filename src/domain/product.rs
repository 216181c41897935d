use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ProductId, ProductName, ProductPrice};

/// A catalog product. The category reference is optional and may dangle;
/// projection substitutes a placeholder when it cannot be resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "productId")]
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub image_url: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub image_url: String,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
