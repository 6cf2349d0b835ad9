//! Общая страница списка коллекции.
//!
//! Every collection screen is the same page parameterized by a [`ListScreen`]
//! and a row type implementing [`ListRow`]. The page owns one
//! [`ListControllerState`]; every transition is followed by exactly one fetch,
//! and only the response to the latest fetch reaches the table.

pub mod columns;

pub use columns::{badge_tone, CellValue, ColumnDef, ColumnKind, ListRow};

use contracts::shared::list_query::{FilterableProperty, ListView, DEFAULT_VIEW};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api::ApiClient;
use crate::shared::api_utils::ClientConfig;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::filter_dialog::FilterDialog;
use crate::shared::icons::icon;
use crate::shared::list_controller::{CollectionFetcher, ListControllerState, ScreenData};
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::{PageCategory, PageFrame};

/// Static description of one collection screen
#[derive(Debug, Clone, Copy)]
pub struct ListScreen {
    /// `{entity}--list`
    pub page_id: &'static str,
    pub title: &'static str,
    pub endpoint: &'static str,
    pub default_sort_by: &'static str,
    pub properties: &'static [FilterableProperty],
    pub views: &'static [ListView],
    pub columns: &'static [ColumnDef],
    pub search_placeholder: &'static str,
}

/// Optional hooks for screens that do more than list
#[derive(Default)]
pub struct ListPageExtras {
    /// Bumping the value refetches the current page
    pub reload: Option<RwSignal<u64>>,
    /// Rendered next to the refresh button
    pub header_actions: Option<ViewFn>,
}

pub fn collection_list_page<T: ListRow>(screen: ListScreen, extras: ListPageExtras) -> impl IntoView {
    let api = use_context::<ApiClient>().expect("ApiClient not found in context");
    let config = use_context::<ClientConfig>().expect("ClientConfig not found in context");
    let page_size = config.page_size;

    let fetcher = CollectionFetcher::<T>::new(api, screen.endpoint);
    let tracker = fetcher.tracker().clone();
    on_cleanup(move || tracker.unmount());

    let state = RwSignal::new(ListControllerState::new(screen.default_sort_by));
    let data = RwSignal::new(ScreenData::<T>::Idle);
    let notice = RwSignal::new(None::<String>);
    let is_filter_expanded = RwSignal::new(false);
    let show_dialog = RwSignal::new(false);
    let reload = extras.reload.unwrap_or_else(|| RwSignal::new(0));

    let load = Callback::new(move |_: ()| {
        let query = state.with_untracked(|s| s.to_query(page_size));
        data.set(ScreenData::Loading);
        let pending = fetcher.fetch(query);
        spawn_local(async move {
            let outcome = pending.await;
            // the signal is gone once the page is unmounted
            let _ = data.try_update(|d| d.apply(outcome));
        });
    });

    Effect::new(move |_| {
        reload.track();
        load.run(());
    });

    let set_query = Callback::new(move |text: String| {
        if state.with_untracked(|s| s.query() == text) {
            return;
        }
        state.update(|s| s.set_query(text));
        load.run(());
    });

    let set_view = move |view: &'static str| {
        state.update(|s| s.set_view(view));
        load.run(());
    };

    let toggle_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(&field));
        load.run(());
    });

    let go_to_page = Callback::new(move |page: usize| {
        match state.try_update(|s| s.change_page(page)) {
            Some(Ok(())) => {
                notice.set(None);
                load.run(());
            }
            Some(Err(e)) => notice.set(Some(e.to_string())),
            None => {}
        }
    });

    let remove_filter = move |index: usize| {
        match state.try_update(|s| s.remove_filter(index)) {
            Some(Ok(_)) => load.run(()),
            Some(Err(e)) => notice.set(Some(e.to_string())),
            None => {}
        }
    };

    let clear_all = move |_| {
        state.update(|s| {
            s.clear_filters();
            s.set_query(String::new());
            s.set_view(DEFAULT_VIEW);
        });
        load.run(());
    };

    let total_count = Signal::derive(move || data.with(|d| d.total_count()));
    let total_pages = Signal::derive(move || {
        data.with(|d| match d {
            ScreenData::Loaded(page) => page.page_count(page_size),
            _ => 1,
        })
    });
    let is_loading = Signal::derive(move || data.with(|d| d.is_loading()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.active_filter_count()));
    let columns = screen.columns;
    let header_actions = extras.header_actions;

    view! {
        <PageFrame page_id=screen.page_id category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{screen.title}</h1>
                    <Badge>{move || total_count.get().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        {header_actions.as_ref().map(|actions| actions.run())}
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| load.run(())
                            disabled=is_loading
                        >
                            {icon("refresh")}
                            "Refresh"
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=active_filters_count
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page()))
                            total_pages=total_pages
                            total_count=total_count
                            on_page_change=go_to_page
                            disabled=is_loading
                        />
                    }
                    actions=move || view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| show_dialog.set(true)
                        >
                            {icon("filter")}
                            {move || match state.with(|s| s.filters().len()) {
                                0 => "Filter".to_string(),
                                n => format!("Filter ({})", n),
                            }}
                        </Button>
                    }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small>
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.query().to_string()))
                                on_change=set_query
                                placeholder=screen.search_placeholder
                            />
                            <div class="view-tabs">
                                {screen.views.iter().map(|list_view| {
                                    let value = list_view.value;
                                    view! {
                                        <button
                                            class=move || if state.with(|s| s.view() == value) {
                                                "view-tab view-tab--active"
                                            } else {
                                                "view-tab"
                                            }
                                            on:click=move |_| set_view(value)
                                        >
                                            {list_view.label}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </Flex>
                    }
                    filter_tags=move || view! {
                        <Show when=move || state.with(|s| !s.filters().is_empty())>
                            {move || state.with(|s| s.filters().to_vec()).into_iter().enumerate().map(|(index, clause)| view! {
                                <FilterTag
                                    label=clause.display_text()
                                    on_remove=Callback::new(move |_| remove_filter(index))
                                />
                            }).collect_view()}
                            <button class="button button--link" on:click=clear_all>"Clear all"</button>
                        </Show>
                    }
                />

                {move || notice.get().map(|msg| view! {
                    <div class="alert alert--warning">{msg}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {columns.iter().map(|column| {
                                    if column.sortable {
                                        view! {
                                            <SortableHeaderCell
                                                label=column.label
                                                sort_field=column.key
                                                current_sort_field=Signal::derive(move || state.with(|s| s.sort_by().to_string()))
                                                sort=Signal::derive(move || state.with(|s| s.sort()))
                                                on_sort=toggle_sort
                                                min_width=column.min_width
                                                align=column.kind.align()
                                            />
                                        }.into_any()
                                    } else {
                                        view! {
                                            <TableHeaderCell resizable=false min_width=column.min_width>
                                                {column.label}
                                            </TableHeaderCell>
                                        }.into_any()
                                    }
                                }).collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || render_body(data, columns, load)}
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Show when=move || show_dialog.get()>
                <FilterDialog
                    properties=screen.properties
                    state=state
                    on_changed=load
                    on_close=Callback::new(move |_| show_dialog.set(false))
                />
            </Show>
        </PageFrame>
    }
}

fn render_body<T: ListRow>(
    data: RwSignal<ScreenData<T>>,
    columns: &'static [ColumnDef],
    retry: Callback<()>,
) -> AnyView {
    let span = columns.len().to_string();
    data.with(|d| match d {
        ScreenData::Idle | ScreenData::Loading => view! {
            <TableRow>
                <TableCell attr:colspan=span>
                    <div class="table__placeholder"><Spinner /></div>
                </TableCell>
            </TableRow>
        }
        .into_any(),
        ScreenData::Failed(message) => {
            let message = message.clone();
            view! {
                <TableRow>
                    <TableCell attr:colspan=span>
                        <div class="table__placeholder table__placeholder--error">
                            <span>{message}</span>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| retry.run(())>
                                "Try again"
                            </Button>
                        </div>
                    </TableCell>
                </TableRow>
            }
            .into_any()
        }
        ScreenData::Loaded(page) if page.is_empty() => view! {
            <TableRow>
                <TableCell attr:colspan=span>
                    <div class="table__placeholder">"No records match the current filters"</div>
                </TableCell>
            </TableRow>
        }
        .into_any(),
        ScreenData::Loaded(page) => page
            .rows
            .iter()
            .map(|row| render_row(row, columns))
            .collect_view()
            .into_any(),
    })
}

fn render_row<T: ListRow>(row: &T, columns: &'static [ColumnDef]) -> impl IntoView {
    let cells = columns
        .iter()
        .map(|column| {
            let value = row.cell(column.key);
            let text = column.kind.format(&value);
            let content = match column.kind {
                ColumnKind::Badge if value != CellValue::Missing => {
                    let class = format!("badge {}", badge_tone(&text));
                    view! { <span class=class>{text}</span> }.into_any()
                }
                ColumnKind::Mono => view! {
                    <span style="font-family: monospace; font-size: var(--font-size-xs);">{text}</span>
                }
                .into_any(),
                _ => text.into_any(),
            };
            let style = format!("text-align: {};", column.kind.align());
            view! {
                <TableCell>
                    <TableCellLayout truncate=true attr:style=style>
                        {content}
                    </TableCellLayout>
                </TableCell>
            }
        })
        .collect_view();

    view! {
        <TableRow attr:data-row-id=row.row_id()>
            {cells}
        </TableRow>
    }
}
