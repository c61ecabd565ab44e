use dioxus::prelude::*;
use shared_types::SidebarFixture;
use shared_ui::components::{Button, ButtonVariant};

mod components;
mod config;
mod fixtures;

use components::ArchivedComplaintSidebar;

const DEMO_CSS: Asset = asset!("/assets/demo.css");

fn main() {
    let app_config = config::load_config();

    if let Err(e) = dioxus::logger::init(config::tracing_level(app_config.logging.level)) {
        eprintln!("[logger] failed to install subscriber: {e}");
    }
    tracing::info!(
        level = app_config.logging.level.as_str(),
        fixture = app_config.demo.fixture.as_str(),
        "starting archived complaint demo"
    );

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

/// Demo host for the sidebar. Plays the parent's role: owns the sample data
/// and reacts to the unarchive callback.
#[component]
fn App() -> Element {
    let fixture: SidebarFixture = use_hook(|| fixtures::load(config::app_config().demo.fixture));
    let mut archived = use_signal(|| true);

    let complaint_id = fixture
        .complaint
        .as_ref()
        .and_then(|c| c.field("id"))
        .map(|id| match id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_else(|| "?".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: DEMO_CSS }
        main { class: "demo-shell", "data-platform": client_platform(),
            div { class: "demo-content",
                h1 { "Denuncia #{complaint_id}" }
                if archived() {
                    p { class: "demo-note", "Esta denuncia está archivada." }
                } else {
                    p { class: "demo-note", "La denuncia fue desarchivada." }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| archived.set(true),
                        "Volver a archivar"
                    }
                }
            }
            if archived() {
                ArchivedComplaintSidebar {
                    complaint: fixture.complaint.clone(),
                    categorias: fixture.categorias.clone(),
                    files: fixture.files.clone(),
                    estado: fixture.estado.clone(),
                    on_archive: {
                        let complaint_id = complaint_id.clone();
                        move |_| {
                            tracing::info!(complaint = %complaint_id, "complaint unarchived");
                            archived.set(false);
                        }
                    },
                }
            }
        }
    }
}
