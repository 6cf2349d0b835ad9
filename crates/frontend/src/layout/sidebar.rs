//! Sidebar navigation: one entry per routed screen

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { path: "/leads", label: "Leads", icon: "leads" },
    MenuItem { path: "/installs", label: "Installs", icon: "installs" },
    MenuItem { path: "/services", label: "Service", icon: "services" },
    MenuItem { path: "/stock", label: "Stock", icon: "stock" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {MENU_ITEMS.iter().map(|item| view! {
                // A sets aria-current="page" on the active entry
                <A href=item.path>
                    <div class="app-sidebar__item">
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </div>
                </A>
            }).collect_view()}
        </nav>
    }
}
