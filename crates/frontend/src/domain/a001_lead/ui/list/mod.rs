use crate::domain::a001_lead::ui::intake::LeadIntakeForm;
use crate::shared::collection_list::{
    collection_list_page, CellValue, ColumnDef, ColumnKind, ListPageExtras, ListRow, ListScreen,
};
use crate::shared::icons::icon;
use contracts::domain::a001_lead::{
    LeadDto, PriceAdjustment, DEFAULT_SORT_BY, ENDPOINT, FILTERABLE_PROPERTIES, VIEWS,
};
use leptos::prelude::*;
use thaw::*;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("name", "Name", ColumnKind::Text).width(180.0),
    ColumnDef::new("email", "Email", ColumnKind::Text).width(200.0),
    ColumnDef::new("phone", "Phone", ColumnKind::Text),
    ColumnDef::new("status", "Status", ColumnKind::Badge).width(100.0),
    ColumnDef::new("source", "Source", ColumnKind::Text).width(100.0),
    ColumnDef::new("systemSize", "System", ColumnKind::Number { decimals: 1, unit: "kW" })
        .width(90.0),
    ColumnDef::new("quotedPrice", "Quote", ColumnKind::Money),
    ColumnDef::new("adjustment", "Vs. list price", ColumnKind::Text)
        .unsortable()
        .width(140.0),
    ColumnDef::new("createdAt", "Created", ColumnKind::Date),
];

pub const SCREEN: ListScreen = ListScreen {
    page_id: "a001_lead--list",
    title: "Leads",
    endpoint: ENDPOINT,
    default_sort_by: DEFAULT_SORT_BY,
    properties: FILTERABLE_PROPERTIES,
    views: VIEWS,
    columns: COLUMNS,
    search_placeholder: "Name, email, phone...",
};

impl ListRow for LeadDto {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "email" => self.email.clone().into(),
            "phone" => self.phone.clone().into(),
            "address" => self.address.clone().into(),
            "status" => self.status.as_str().into(),
            "source" => self.source.clone().into(),
            "systemSize" => self.system_size.into(),
            "listPrice" => self.list_price.into(),
            "quotedPrice" => self.quoted_price.into(),
            "adjustment" => {
                match PriceAdjustment::from_prices(self.list_price, self.quoted_price) {
                    PriceAdjustment::None => CellValue::Missing,
                    adjustment => adjustment.label().into(),
                }
            }
            "contacted" => self.contacted.into(),
            "createdAt" => self.created_at.as_str().into(),
            _ => CellValue::Missing,
        }
    }
}

#[component]
pub fn LeadList() -> impl IntoView {
    let reload = RwSignal::new(0u64);
    let show_intake = RwSignal::new(false);

    let extras = ListPageExtras {
        reload: Some(reload),
        header_actions: Some(ViewFn::from(move || view! {
            <Button appearance=ButtonAppearance::Primary on_click=move |_| show_intake.set(true)>
                {icon("plus")}
                "New lead"
            </Button>
        })),
    };

    view! {
        {collection_list_page::<LeadDto>(SCREEN, extras)}
        <Show when=move || show_intake.get()>
            <LeadIntakeForm
                on_saved=Callback::new(move |_| {
                    show_intake.set(false);
                    reload.update(|n| *n += 1);
                })
                on_cancel=Callback::new(move |_| show_intake.set(false))
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::find_property;

    fn lead() -> LeadDto {
        serde_json::from_value(serde_json::json!({
            "id": "0b5c2a43-52b4-4a0e-9a53-2f6f6a0d7d11",
            "name": "Dana Whitfield",
            "email": "dana@example.com",
            "status": "New",
            "systemSize": 7.2,
            "listPrice": 20000.0,
            "quotedPrice": 18000.0,
            "createdAt": "2024-04-02T10:15:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_cells() {
        let row = lead();
        assert_eq!(row.cell("name"), CellValue::Text("Dana Whitfield".into()));
        assert_eq!(row.cell("phone"), CellValue::Missing);
        assert_eq!(row.cell("adjustment"), CellValue::Text("10.00% discount".into()));
        assert_eq!(row.cell("contacted"), CellValue::Flag(false));
    }

    #[test]
    fn test_sortable_columns_are_filterable_properties() {
        for column in COLUMNS.iter().filter(|c| c.sortable) {
            assert!(
                find_property(FILTERABLE_PROPERTIES, column.key).is_some(),
                "{} is not a lead property",
                column.key
            );
        }
    }
}
