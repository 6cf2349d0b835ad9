use crate::shared::collection_list::{
    collection_list_page, CellValue, ColumnDef, ColumnKind, ListPageExtras, ListRow, ListScreen,
};
use contracts::domain::a002_install::{
    InstallDto, DEFAULT_SORT_BY, ENDPOINT, FILTERABLE_PROPERTIES, VIEWS,
};
use leptos::prelude::*;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("customerName", "Customer", ColumnKind::Text).width(180.0),
    ColumnDef::new("address", "Address", ColumnKind::Text).width(220.0),
    ColumnDef::new("status", "Status", ColumnKind::Badge).width(110.0),
    ColumnDef::new("scheduledDate", "Scheduled", ColumnKind::Date),
    ColumnDef::new("completedDate", "Completed", ColumnKind::Date),
    ColumnDef::new("installer", "Installer", ColumnKind::Text),
    ColumnDef::new("panelCount", "Panels", ColumnKind::Number { decimals: 0, unit: "" }).width(80.0),
    ColumnDef::new("systemSize", "System", ColumnKind::Number { decimals: 1, unit: "kW" }).width(90.0),
    ColumnDef::new("gridConnected", "Grid", ColumnKind::Flag).width(70.0),
];

pub const SCREEN: ListScreen = ListScreen {
    page_id: "a002_install--list",
    title: "Installs",
    endpoint: ENDPOINT,
    default_sort_by: DEFAULT_SORT_BY,
    properties: FILTERABLE_PROPERTIES,
    views: VIEWS,
    columns: COLUMNS,
    search_placeholder: "Customer, address, installer...",
};

impl ListRow for InstallDto {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "customerName" => self.customer_name.as_str().into(),
            "address" => self.address.as_str().into(),
            "status" => self.status.as_str().into(),
            "scheduledDate" => self.scheduled_date.clone().into(),
            "completedDate" => self.completed_date.clone().into(),
            "installer" => self.installer.clone().into(),
            "panelCount" => self.panel_count.into(),
            "systemSize" => self.system_size.into(),
            "gridConnected" => self.grid_connected.into(),
            _ => CellValue::Missing,
        }
    }
}

#[component]
pub fn InstallList() -> impl IntoView {
    collection_list_page::<InstallDto>(SCREEN, ListPageExtras::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        let row: InstallDto = serde_json::from_value(serde_json::json!({
            "id": "9a1c7e0e-3f4b-4d0d-8a6f-1c2b3d4e5f60",
            "customerName": "Ortega Family",
            "address": "14 Sunset Rd",
            "status": "Scheduled",
            "scheduledDate": "2024-07-09",
            "panelCount": 18
        }))
        .unwrap();

        assert_eq!(row.cell("panelCount"), CellValue::Number(18.0));
        assert_eq!(row.cell("completedDate"), CellValue::Missing);
        assert_eq!(row.cell("gridConnected"), CellValue::Flag(false));
        assert_eq!(
            ColumnKind::Date.format(&row.cell("scheduledDate")),
            "2024-07-09"
        );
    }
}
