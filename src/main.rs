//! RenovaStudio desktop entry point

use renova_studio::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("renova_studio=info")),
        )
        .init();

    tracing::info!("Starting RenovaStudio");
    dioxus::launch(App);
}
