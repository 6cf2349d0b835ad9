use crate::routes::routes::AppRoutes;
use crate::shared::api::{ApiClient, HttpCollectionApi};
use crate::shared::api_utils::ClientConfig;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_window();
    log::info!(
        "console backend {} (page size {})",
        config.base_url,
        config.page_size
    );

    // Screens take the API client from context; tests provide their own
    let api: ApiClient = Arc::new(HttpCollectionApi::new(config.clone()));
    provide_context(config);
    provide_context(api);

    view! {
        <AppRoutes />
    }
}
