use crate::shared::config::ClientConfig;
use crate::usecases::u501_query_console::QueryConsoleView;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let query_url = config.query_url();

    view! {
        <ConfigProvider>
            <QueryConsoleView query_url=query_url />
        </ConfigProvider>
    }
}
