use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_query::{FilterableProperty, ListView, PropertyType};

pub const ENDPOINT: &str = "/api/services";
pub const DEFAULT_SORT_BY: &str = "openedAt";

/// Сервисная заявка по уже установленной системе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDto {
    pub id: Uuid,
    pub ticket_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub issue: String,
    pub priority: String,
    pub status: String,
    /// ISO 8601
    pub opened_at: String,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub under_warranty: bool,
}

pub const FILTERABLE_PROPERTIES: &[FilterableProperty] = &[
    FilterableProperty::new("Ticket", "ticketNumber", PropertyType::String),
    FilterableProperty::new("Customer", "customerName", PropertyType::String),
    FilterableProperty::new("Address", "address", PropertyType::String),
    FilterableProperty::new("Issue", "issue", PropertyType::String),
    FilterableProperty::new("Priority", "priority", PropertyType::String),
    FilterableProperty::new("Opened", "openedAt", PropertyType::Date),
    FilterableProperty::new("Resolved", "resolvedAt", PropertyType::Date),
    FilterableProperty::new("Under warranty", "underWarranty", PropertyType::Boolean),
];

pub const VIEWS: &[ListView] = &[
    ListView::new("All", "all"),
    ListView::new("Open", "Open"),
    ListView::new("Awaiting parts", "Awaiting Parts"),
    ListView::new("Resolved", "Resolved"),
];
