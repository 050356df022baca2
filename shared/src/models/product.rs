//! Product Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};

/// Catalog product (material)
///
/// Read-only for the session. Fields beyond the ones the storefront needs are
/// kept in `extra` so the record survives a serialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "MaterialId", alias = "materialId")]
    pub material_id: i64,
    #[serde(rename = "MaterialName", alias = "materialName", default)]
    pub material_name: String,
    /// Category the product is filed under (group or deepest available level)
    #[serde(rename = "MaterialTreeId", alias = "materialTreeId")]
    pub material_tree_id: i64,
    /// `None` means "price on request"
    #[serde(
        rename = "RetailPrice",
        alias = "retailPrice",
        default,
        deserialize_with = "serde_helpers::lenient_price"
    )]
    pub retail_price: Option<f64>,
    #[serde(
        rename = "WholesalePrice",
        alias = "wholesalePrice",
        default,
        deserialize_with = "serde_helpers::lenient_price"
    )]
    pub wholesale_price: Option<f64>,
    #[serde(
        rename = "SuppliersCount",
        alias = "suppliersCount",
        default,
        deserialize_with = "serde_helpers::count_or_zero"
    )]
    pub suppliers_count: u32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    pub fn new(material_id: i64, material_tree_id: i64, material_name: impl Into<String>) -> Self {
        Self {
            material_id,
            material_name: material_name.into(),
            material_tree_id,
            retail_price: None,
            wholesale_price: None,
            suppliers_count: 0,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_prices(mut self, retail: Option<f64>, wholesale: Option<f64>) -> Self {
        self.retail_price = retail;
        self.wholesale_price = wholesale;
        self
    }

    pub fn with_suppliers(mut self, count: u32) -> Self {
        self.suppliers_count = count;
        self
    }

    pub fn is_price_on_request(&self) -> bool {
        self.retail_price.is_none()
    }
}

/// Product photo reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    /// `~/Content/...`, absolute `http(s)://...` or relative path
    #[serde(rename = "FileSrc", alias = "fileSrc", default)]
    pub file_src: String,
    #[serde(rename = "FileName", alias = "fileName", default)]
    pub file_name: String,
}
