use dioxus::prelude::*;
use jobmatch_ui::api::ApiClient;
use jobmatch_ui::config::AppConfig;
use jobmatch_ui::session::AppContext;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod components;
mod routes;

use routes::Route;

/// Services shared with every component through the Dioxus context
#[derive(Clone)]
pub struct Services {
    pub api: ApiClient,
    pub session: AppContext,
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobmatch_ui=info")),
        )
        .init();

    let config = AppConfig::load()?;
    info!(api = %config.api_base_url, "Starting jobmatch UI");

    let session = AppContext::open(&config.storage_dir)?;
    let api = ApiClient::new(&config)?;

    LaunchBuilder::new()
        .with_context(Services { api, session })
        .launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
