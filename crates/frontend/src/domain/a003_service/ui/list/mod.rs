use crate::shared::collection_list::{
    collection_list_page, CellValue, ColumnDef, ColumnKind, ListPageExtras, ListRow, ListScreen,
};
use contracts::domain::a003_service::{
    ServiceTicketDto, DEFAULT_SORT_BY, ENDPOINT, FILTERABLE_PROPERTIES, VIEWS,
};
use leptos::prelude::*;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ticketNumber", "Ticket", ColumnKind::Mono).width(100.0),
    ColumnDef::new("customerName", "Customer", ColumnKind::Text).width(180.0),
    ColumnDef::new("issue", "Issue", ColumnKind::Text).width(240.0),
    ColumnDef::new("priority", "Priority", ColumnKind::Text).width(90.0),
    ColumnDef::new("status", "Status", ColumnKind::Badge).width(120.0),
    ColumnDef::new("openedAt", "Opened", ColumnKind::DateTime).width(140.0),
    ColumnDef::new("resolvedAt", "Resolved", ColumnKind::DateTime).width(140.0),
    ColumnDef::new("underWarranty", "Warranty", ColumnKind::Flag).width(80.0),
];

pub const SCREEN: ListScreen = ListScreen {
    page_id: "a003_service--list",
    title: "Service tickets",
    endpoint: ENDPOINT,
    default_sort_by: DEFAULT_SORT_BY,
    properties: FILTERABLE_PROPERTIES,
    views: VIEWS,
    columns: COLUMNS,
    search_placeholder: "Ticket, customer, issue...",
};

impl ListRow for ServiceTicketDto {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "ticketNumber" => self.ticket_number.as_str().into(),
            "customerName" => self.customer_name.as_str().into(),
            "address" => self.address.clone().into(),
            "issue" => self.issue.as_str().into(),
            "priority" => self.priority.as_str().into(),
            "status" => self.status.as_str().into(),
            "openedAt" => self.opened_at.as_str().into(),
            "resolvedAt" => self.resolved_at.clone().into(),
            "underWarranty" => self.under_warranty.into(),
            _ => CellValue::Missing,
        }
    }
}

#[component]
pub fn ServiceTicketList() -> impl IntoView {
    collection_list_page::<ServiceTicketDto>(SCREEN, ListPageExtras::default())
}
