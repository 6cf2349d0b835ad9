//! Диалог фильтров списка.
//!
//! Editing happens on a pending batch ([`FilterDialogState`]); the list only
//! changes when the batch is applied or cleared.

pub mod model;

pub use model::FilterDialogState;

use contracts::shared::list_query::FilterableProperty;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::list_controller::ListControllerState;

#[component]
pub fn FilterDialog(
    /// Properties the user may filter on
    properties: &'static [FilterableProperty],
    /// State of the list the filters apply to
    state: RwSignal<ListControllerState>,
    /// Called after the list state changed and needs a refetch
    on_changed: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let dialog = RwSignal::new(FilterDialogState::open(
        properties,
        &state.with_untracked(|s| s.filters().to_vec()),
    ));

    let escape = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let on_property_change = move |ev: ev::Event| {
        let name = event_target_value(&ev);
        dialog.update(|d| {
            if let Err(e) = d.select_property(&name) {
                log::warn!("filter dialog: {}", e);
            }
        });
    };

    let on_operator_change = move |ev: ev::Event| {
        let key = event_target_value(&ev);
        dialog.update(|d| {
            if let Err(e) = d.select_operator(&key) {
                log::warn!("filter dialog: {}", e);
            }
        });
    };

    let add = move |_| {
        dialog.update(|d| {
            // the error stays visible in the dialog
            let _ = d.add_pending();
        });
    };

    let apply = move |_| {
        let mut controller = state.get_untracked();
        let applied = dialog
            .try_update(|d| d.apply(&mut controller).is_ok())
            .unwrap_or(false);
        if applied {
            state.set(controller);
            on_changed.run(());
            on_close.run(());
        }
    };

    let clear = move |_| {
        let mut controller = state.get_untracked();
        let had_filters = !controller.filters().is_empty();
        dialog.update(|d| d.clear(&mut controller));
        if had_filters {
            state.set(controller);
            on_changed.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal filter-dialog" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Filters"</h2>
                    <div class="modal-header-actions">
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>

                <div class="modal-body">
                    <div class="filter-dialog__row">
                        <select
                            class="filter-dialog__property"
                            on:change=on_property_change
                            prop:value=move || dialog.with(|d| d.property().map(|p| p.name).unwrap_or_default().to_string())
                        >
                            {properties.iter().map(|p| view! {
                                <option value=p.name>{p.label}</option>
                            }).collect_view()}
                        </select>

                        <select
                            class="filter-dialog__operator"
                            on:change=on_operator_change
                            prop:value=move || dialog.with(|d| d.operator().map(|op| op.value()).unwrap_or_default().to_string())
                            disabled=move || dialog.with(|d| !d.can_add())
                        >
                            {move || dialog.with(|d| d.available_operators()).into_iter().map(|op| view! {
                                <option value=op.value()>{op.label()}</option>
                            }).collect_view()}
                        </select>

                        <Show when=move || dialog.with(|d| d.value_input_visible())>
                            <input
                                type="text"
                                class="filter-dialog__value"
                                placeholder="Value"
                                prop:value=move || dialog.with(|d| d.value().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    dialog.update(|d| d.set_value(value));
                                }
                            />
                        </Show>

                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=add
                            disabled=Signal::derive(move || dialog.with(|d| !d.can_add()))
                        >
                            {icon("plus")}
                            "Add"
                        </Button>
                    </div>

                    {move || dialog.with(|d| d.last_error().map(|e| e.to_string())).map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })}

                    <div class="filter-dialog__pending">
                        {move || {
                            let pending = dialog.with(|d| d.pending().to_vec());
                            if pending.is_empty() {
                                view! { <span class="filter-dialog__empty">"No filters"</span> }.into_any()
                            } else {
                                pending.into_iter().enumerate().map(|(index, clause)| view! {
                                    <div class="filter-tag">
                                        <span>{clause.display_text()}</span>
                                        <button
                                            class="filter-tag__remove"
                                            title="Remove"
                                            on:click=move |_| dialog.update(|d| d.remove_pending(index))
                                        >
                                            {icon("x")}
                                        </button>
                                    </div>
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Subtle on_click=clear>
                        "Clear"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=apply>
                        "Apply"
                    </Button>
                </div>
            </div>
        </div>
    }
}
