use crate::domain::a001_lead::ui::list::LeadList;
use crate::domain::a002_install::ui::list::InstallList;
use crate::domain::a003_service::ui::list::ServiceTicketList;
use crate::domain::a004_stock_item::ui::list::StockList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/") view=LeadList />
                    <Route path=path!("/leads") view=LeadList />
                    <Route path=path!("/installs") view=InstallList />
                    <Route path=path!("/services") view=ServiceTicketList />
                    <Route path=path!("/stock") view=StockList />
                </Routes>
            </Shell>
        </Router>
    }
}
