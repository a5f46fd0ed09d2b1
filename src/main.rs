use dioxus::prelude::*;

mod components;
mod utils;

use components::{ChatPanel, Header};
use std::sync::Arc;
use tracing::{info, warn, Level};
use utils::{BackendClient, ChatTransport, Settings};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const APP_TITLE: &str = "AgenticAI-PPL Chat";

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {}", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let app_settings = use_signal(|| {
        Settings::load().unwrap_or_else(|e| {
            warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        })
    });

    let transport = use_signal(|| {
        let settings = app_settings.read();
        info!(backend = %settings.backend_url, "starting chat client");
        BackendClient::new(settings.backend_url.clone(), settings.request_timeout_secs)
            .map(|client| Arc::new(client) as Arc<dyn ChatTransport>)
            .map_err(|e| format!("Failed to build HTTP client: {}", e))
    });

    let default_model = app_settings.read().default_model;

    rsx! {
        document::Title { "{APP_TITLE}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        main {
            class: "app",

            Header { title: APP_TITLE.to_string() }

            match &*transport.read() {
                Ok(transport) => rsx! {
                    ChatPanel {
                        transport: transport.clone(),
                        default_model,
                    }
                },
                Err(e) => rsx! {
                    div {
                        class: "fatal-error",
                        "{e}"
                    }
                },
            }
        }
    }
}
