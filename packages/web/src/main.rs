use api::ClientConfig;
use dioxus::prelude::*;

use ui::{make_client, ActivityLog, ActivityLogPanel, ActivityLogToggle};
use views::{CourseNotes, Notes};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/notes")]
    Notes {},
    #[route("/courses/:course_id/notes")]
    CourseNotes { course_id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Backend location. Native builds read `notes.toml` and `NOTES_*`
/// variables; the browser build takes `NOTES_API_BASE_URL` at compile time.
fn load_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match option_env!("NOTES_API_BASE_URL") {
            Some(url) => ClientConfig::new(url),
            None => ClientConfig::default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ClientConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load {}: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        })
    }
}

#[component]
fn App() -> Element {
    let log = use_context_provider(|| Signal::new(ActivityLog::default()));
    use_context_provider(move || {
        let config = load_config();
        tracing::info!("Notes API at {}", config.api.base_url);
        Signal::new(make_client(config.api, log))
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
        ActivityLogPanel {}
        ActivityLogToggle {}
    }
}

/// Redirect `/` to `/notes`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Notes {});
    rsx! {}
}
