//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Created"
//!     sort_field="createdAt"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.sort_by().to_string()))
//!     sort=Signal::derive(move || state.with(|s| s.sort()))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_query::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// Клик по заголовку переключает сортировку, индикатор показывает направление (▲▼)
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущее поле сортировки из state
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Направление сортировки из state
    #[prop(into)]
    sort: Signal<SortDirection>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || {
                    get_sort_class(&current_sort_field.get(), &sort_field_for_class)
                }>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
