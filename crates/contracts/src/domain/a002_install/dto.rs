use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_query::{FilterableProperty, ListView, PropertyType};

pub const ENDPOINT: &str = "/api/installs";
pub const DEFAULT_SORT_BY: &str = "scheduledDate";

/// Монтаж: запланированная или выполненная установка системы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallDto {
    pub id: Uuid,
    pub customer_name: String,
    pub address: String,
    pub status: String,
    /// YYYY-MM-DD
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub completed_date: Option<String>,
    #[serde(default)]
    pub installer: Option<String>,
    #[serde(default)]
    pub panel_count: Option<u32>,
    /// kW
    #[serde(default)]
    pub system_size: Option<f64>,
    #[serde(default)]
    pub grid_connected: bool,
}

pub const FILTERABLE_PROPERTIES: &[FilterableProperty] = &[
    FilterableProperty::new("Customer", "customerName", PropertyType::String),
    FilterableProperty::new("Address", "address", PropertyType::String),
    FilterableProperty::new("Status", "status", PropertyType::String),
    FilterableProperty::new("Installer", "installer", PropertyType::String),
    FilterableProperty::new("Scheduled", "scheduledDate", PropertyType::Date),
    FilterableProperty::new("Completed", "completedDate", PropertyType::Date),
    FilterableProperty::new("Panels", "panelCount", PropertyType::Number),
    FilterableProperty::new("System size (kW)", "systemSize", PropertyType::Number),
    FilterableProperty::new("Grid connected", "gridConnected", PropertyType::Boolean),
];

pub const VIEWS: &[ListView] = &[
    ListView::new("All", "all"),
    ListView::new("Scheduled", "Scheduled"),
    ListView::new("In progress", "In Progress"),
    ListView::new("Complete", "Complete"),
    ListView::new("Cancelled", "Cancelled"),
];
