pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +----------+-------------------------------+
/// | Sidebar  |  Routed page (PageFrame)      |
/// +----------+-------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="app-body">
                <aside class="app-sidebar">
                    <div class="app-sidebar__brand">"Solar BPM"</div>
                    <Sidebar />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
