use serde::{Serialize, Deserialize};

/// Price text used when a product block has no price element.
pub const NO_PRICE: &str = "Sin precio";

/// One product listed on the collection page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Producto")]
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Precio")]
    pub price: String,
    #[serde(rename = "Imagen")]
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductList {
    pub productos: Vec<Product>,
}
