use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_query::{FilterableProperty, ListView, PropertyType};

pub const ENDPOINT: &str = "/api/stock";
pub const DEFAULT_SORT_BY: &str = "sku";

/// Складская позиция: панели, инверторы, батареи, крепёж
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItemDto {
    pub id: Uuid,
    pub sku: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub unit_cost: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    /// ISO 8601
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub const FILTERABLE_PROPERTIES: &[FilterableProperty] = &[
    FilterableProperty::new("SKU", "sku", PropertyType::String),
    FilterableProperty::new("Description", "description", PropertyType::String),
    FilterableProperty::new("Category", "category", PropertyType::String),
    FilterableProperty::new("Manufacturer", "manufacturer", PropertyType::String),
    FilterableProperty::new("Quantity", "quantity", PropertyType::Number),
    FilterableProperty::new("Unit cost", "unitCost", PropertyType::Number),
    FilterableProperty::new("Location", "location", PropertyType::String),
    FilterableProperty::new("Updated", "updatedAt", PropertyType::Date),
];

pub const VIEWS: &[ListView] = &[
    ListView::new("All", "all"),
    ListView::new("Panels", "Panels"),
    ListView::new("Inverters", "Inverters"),
    ListView::new("Batteries", "Batteries"),
    ListView::new("Low stock", "Low Stock"),
];
