//! Cart line items

use super::product::Product;
use super::serde_helpers;
use serde::{Deserialize, Serialize};

/// One cart row, unique per `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id, or `"{productId}:{supplierId}"` for supplier-specific lines
    #[serde(deserialize_with = "serde_helpers::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub retail_price: Option<f64>,
    #[serde(default)]
    pub wholesale_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    /// Always >= 1 while the line exists
    pub quantity: u32,
}

/// Payload for "add to cart": a line without quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    pub id: String,
    pub title: String,
    pub retail_price: Option<f64>,
    pub wholesale_price: Option<f64>,
    pub image: String,
}

impl CartItemInput {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            retail_price: None,
            wholesale_price: None,
            image: String::new(),
        }
    }

    pub fn with_retail_price(mut self, price: f64) -> Self {
        self.retail_price = Some(price);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Line for a catalog product, keyed by its material id
    pub fn from_product(product: &Product, image: impl Into<String>) -> Self {
        Self {
            id: product.material_id.to_string(),
            title: product.material_name.clone(),
            retail_price: product.retail_price,
            wholesale_price: product.wholesale_price,
            image: image.into(),
        }
    }

    /// Line for one supplier's offer of a product
    pub fn for_supplier(product: &Product, supplier_id: i64, image: impl Into<String>) -> Self {
        Self {
            id: format!("{}:{}", product.material_id, supplier_id),
            ..Self::from_product(product, image)
        }
    }

    /// First line for this input (`quantity = 1`)
    pub fn into_line(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            retail_price: self.retail_price,
            wholesale_price: self.wholesale_price,
            image: self.image,
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product() {
        let product = Product::new(10, 4, "Бетон").with_prices(Some(2350.0), None);
        let input = CartItemInput::from_product(&product, "/images/placeholder.png");
        assert_eq!(input.id, "10");
        assert_eq!(input.title, "Бетон");
        assert_eq!(input.retail_price, Some(2350.0));
        assert_eq!(input.wholesale_price, None);

        let line = input.into_line();
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_supplier_composite_id() {
        let product = Product::new(10, 4, "Бетон");
        let input = CartItemInput::for_supplier(&product, 7, "");
        assert_eq!(input.id, "10:7");
    }

    #[test]
    fn test_numeric_id_in_stored_cart() {
        let json = r#"[{"id": 10, "title": "Бетон", "retailPrice": 100, "wholesalePrice": null, "image": "", "quantity": 2}]"#;
        let items: Vec<CartItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].id, "10");
        assert_eq!(items[0].retail_price, Some(100.0));
        assert_eq!(items[0].quantity, 2);
    }
}
