use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_query::{FilterableProperty, ListView, PropertyType};

pub const ENDPOINT: &str = "/api/leads";
pub const DEFAULT_SORT_BY: &str = "createdAt";

/// Лид: заявка на установку, пришедшая с сайта, по телефону или от партнёра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDto {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub status: String,
    #[serde(default)]
    pub source: Option<String>,
    /// kW
    #[serde(default)]
    pub system_size: Option<f64>,
    #[serde(default)]
    pub list_price: Option<f64>,
    #[serde(default)]
    pub quoted_price: Option<f64>,
    #[serde(default)]
    pub contacted: bool,
    /// ISO 8601
    pub created_at: String,
}

/// Тело запроса на создание лида (форма приёма заявки)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub source: String,
    /// YYYY-MM-DD, optional
    pub preferred_visit_date: String,
    /// Name of the attached utility bill; the file itself stays in the browser
    #[serde(default)]
    pub utility_bill: String,
}

pub const FILTERABLE_PROPERTIES: &[FilterableProperty] = &[
    FilterableProperty::new("Name", "name", PropertyType::String),
    FilterableProperty::new("Email", "email", PropertyType::String),
    FilterableProperty::new("Phone", "phone", PropertyType::String),
    FilterableProperty::new("Address", "address", PropertyType::String),
    FilterableProperty::new("Status", "status", PropertyType::String),
    FilterableProperty::new("Source", "source", PropertyType::String),
    FilterableProperty::new("System size (kW)", "systemSize", PropertyType::Number),
    FilterableProperty::new("Quoted price", "quotedPrice", PropertyType::Number),
    FilterableProperty::new("Created", "createdAt", PropertyType::Date),
    FilterableProperty::new("Contacted", "contacted", PropertyType::Boolean),
];

pub const VIEWS: &[ListView] = &[
    ListView::new("All", "all"),
    ListView::new("New", "New"),
    ListView::new("Contacted", "Contacted"),
    ListView::new("Won", "Won"),
    ListView::new("Lost", "Lost"),
    ListView::new("Archived", "Archived"),
];

pub const SOURCES: &[&str] = &["Website", "Phone", "Referral", "Partner", "Event"];
