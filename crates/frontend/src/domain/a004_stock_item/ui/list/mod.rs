use crate::shared::collection_list::{
    collection_list_page, CellValue, ColumnDef, ColumnKind, ListPageExtras, ListRow, ListScreen,
};
use contracts::domain::a004_stock_item::{
    StockItemDto, DEFAULT_SORT_BY, ENDPOINT, FILTERABLE_PROPERTIES, VIEWS,
};
use leptos::prelude::*;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("sku", "SKU", ColumnKind::Mono).width(110.0),
    ColumnDef::new("description", "Description", ColumnKind::Text).width(240.0),
    ColumnDef::new("category", "Category", ColumnKind::Text),
    ColumnDef::new("manufacturer", "Manufacturer", ColumnKind::Text),
    ColumnDef::new("quantity", "Qty", ColumnKind::Number { decimals: 0, unit: "" }).width(70.0),
    ColumnDef::new("unitCost", "Unit cost", ColumnKind::Money),
    ColumnDef::new("stockValue", "Stock value", ColumnKind::Money).unsortable(),
    ColumnDef::new("location", "Location", ColumnKind::Text),
    ColumnDef::new("updatedAt", "Updated", ColumnKind::Date),
];

pub const SCREEN: ListScreen = ListScreen {
    page_id: "a004_stock_item--list",
    title: "Stock",
    endpoint: ENDPOINT,
    default_sort_by: DEFAULT_SORT_BY,
    properties: FILTERABLE_PROPERTIES,
    views: VIEWS,
    columns: COLUMNS,
    search_placeholder: "SKU, description...",
};

impl ListRow for StockItemDto {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "sku" => self.sku.as_str().into(),
            "description" => self.description.as_str().into(),
            "category" => self.category.as_str().into(),
            "manufacturer" => self.manufacturer.clone().into(),
            "quantity" => self.quantity.into(),
            "unitCost" => self.unit_cost.into(),
            "stockValue" => self.unit_cost.map(|cost| cost * self.quantity as f64).into(),
            "location" => self.location.clone().into(),
            "updatedAt" => self.updated_at.clone().into(),
            _ => CellValue::Missing,
        }
    }
}

#[component]
pub fn StockList() -> impl IntoView {
    collection_list_page::<StockItemDto>(SCREEN, ListPageExtras::default())
}
