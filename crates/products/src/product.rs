use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shelf_core::{Entity, ProductId, ValueObject};

/// Product category (value object, compared by name).
///
/// Serde aliases are the lowercase keys: readers fold property names to
/// lowercase before decoding, so either spelling is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "CategoryName", alias = "categoryname", default)]
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ValueObject for Category {}

/// Product manufacturer (value object, compared by name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Manufacturer {
    #[serde(rename = "ManufacturerName", alias = "manufacturername", default)]
    pub name: String,
}

impl Manufacturer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ValueObject for Manufacturer {}

/// A catalog record, as held in memory and persisted on disk.
///
/// Missing properties decode to their empty defaults so that a partially
/// written record still loads; the validator flags it on the next edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Id", alias = "id", default)]
    pub id: ProductId,
    #[serde(rename = "ProductName", alias = "productname", default)]
    pub name: String,
    #[serde(rename = "ProductDescription", alias = "productdescription", default)]
    pub description: String,
    #[serde(rename = "Category", alias = "category", default)]
    pub category: Option<Category>,
    #[serde(rename = "Manufacturer", alias = "manufacturer", default)]
    pub manufacturer: Option<Manufacturer>,
    #[serde(
        rename = "ProductPrice",
        alias = "productprice",
        with = "rust_decimal::serde::arbitrary_precision",
        default
    )]
    pub price: Decimal,
}

impl Product {
    /// Build a record for a freshly minted identifier from a creation request.
    pub fn from_request(id: ProductId, request: &ProductRequest) -> Self {
        Self {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            category: request.category.clone(),
            manufacturer: request.manufacturer.clone(),
            price: request.price,
        }
    }

    /// Overwrite every mutable field from `other`. The identifier is kept.
    pub fn apply_changes(&mut self, other: &Product) {
        self.name = other.name.clone();
        self.description = other.description.clone();
        self.category = other.category.clone();
        self.manufacturer = other.manufacturer.clone();
        self.price = other.price;
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    pub fn manufacturer_name(&self) -> Option<&str> {
        self.manufacturer.as_ref().map(|m| m.name.as_str())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Creation input: a product without an identifier.
///
/// The catalog service assigns the identifier when the request is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    #[serde(rename = "ProductName", alias = "productname", default)]
    pub name: String,
    #[serde(rename = "ProductDescription", alias = "productdescription", default)]
    pub description: String,
    #[serde(rename = "Category", alias = "category", default)]
    pub category: Option<Category>,
    #[serde(rename = "Manufacturer", alias = "manufacturer", default)]
    pub manufacturer: Option<Manufacturer>,
    #[serde(
        rename = "ProductPrice",
        alias = "productprice",
        with = "rust_decimal::serde::arbitrary_precision",
        default
    )]
    pub price: Decimal,
}

impl ProductRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        manufacturer: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: Some(Category::new(category)),
            manufacturer: Some(Manufacturer::new(manufacturer)),
            price,
        }
    }
}

/// Field keys reported in validation and uniqueness errors.
///
/// Presentation layers key off these exact strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Description,
    Category,
    Manufacturer,
    Price,
}

impl ProductField {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Id => "Id",
            ProductField::Name => "Name",
            ProductField::Description => "Description",
            ProductField::Category => "Category",
            ProductField::Manufacturer => "Manufacturer",
            ProductField::Price => "Price",
        }
    }
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProductField> for String {
    fn from(value: ProductField) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hammer() -> Product {
        Product {
            id: ProductId::from("1"),
            name: "Hammer".to_string(),
            description: "Steel hammer".to_string(),
            category: Some(Category::new("Tools")),
            manufacturer: Some(Manufacturer::new("Bosch")),
            price: Decimal::new(100, 0),
        }
    }

    #[test]
    fn serializes_with_persisted_property_names() {
        let json = serde_json::to_value(hammer()).unwrap();
        assert_eq!(json["Id"], "1");
        assert_eq!(json["ProductName"], "Hammer");
        assert_eq!(json["ProductDescription"], "Steel hammer");
        assert_eq!(json["Category"]["CategoryName"], "Tools");
        assert_eq!(json["Manufacturer"]["ManufacturerName"], "Bosch");
        assert!(json["ProductPrice"].is_number());
        assert_eq!(json["ProductPrice"].as_f64(), Some(100.0));
    }

    #[test]
    fn decodes_lowercase_keys_and_fractional_price() {
        let raw = r#"{
            "id": "7",
            "productname": "Saw",
            "productdescription": "Hand saw",
            "category": { "categoryname": "Tools" },
            "manufacturer": { "manufacturername": "Bahco" },
            "productprice": 19.99
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, "7");
        assert_eq!(product.category_name(), Some("Tools"));
        assert_eq!(product.manufacturer_name(), Some("Bahco"));
        assert_eq!(product.price, Decimal::new(1999, 2));
    }

    #[test]
    fn high_precision_prices_are_written_exactly() {
        for literal in ["0.1234567890123456789", "99999999999999999.99", "12.50"] {
            let mut product = hammer();
            product.price = literal.parse().unwrap();

            let raw = serde_json::to_string(&product).unwrap();
            assert!(raw.contains(&format!("\"ProductPrice\":{literal}")), "{raw}");

            let decoded: Product = serde_json::from_str(&raw).unwrap();
            assert_eq!(decoded.price, product.price);
        }
    }

    #[test]
    fn missing_properties_decode_to_defaults() {
        let product: Product = serde_json::from_str(r#"{ "Id": "9" }"#).unwrap();
        assert_eq!(product.id, "9");
        assert!(product.name.is_empty());
        assert!(product.category.is_none());
        assert_eq!(product.price, Decimal::ZERO);
    }

    #[test]
    fn apply_changes_keeps_identifier() {
        let mut product = hammer();
        let mut edited = hammer();
        edited.id = ProductId::from("other");
        edited.name = "Sledgehammer".to_string();
        edited.price = Decimal::new(250, 0);

        product.apply_changes(&edited);

        assert_eq!(product.id, "1");
        assert_eq!(product.name, "Sledgehammer");
        assert_eq!(product.price, Decimal::new(250, 0));
    }

    #[test]
    fn from_request_copies_every_field() {
        let request = ProductRequest::new("Hammer", "Steel hammer", "Tools", "Bosch", Decimal::new(100, 0));
        let product = Product::from_request(ProductId::from("1"), &request);
        assert_eq!(product, hammer());
    }

    #[test]
    fn field_keys_are_stable() {
        let keys: Vec<String> = [
            ProductField::Id,
            ProductField::Name,
            ProductField::Description,
            ProductField::Category,
            ProductField::Manufacturer,
            ProductField::Price,
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(keys, vec!["Id", "Name", "Description", "Category", "Manufacturer", "Price"]);
    }
}
