use chrono::{Local, TimeZone};
use dioxus::prelude::*;
use shared_types::{
    format_date_in, resolve_archived_date, Category, Complaint, ComplaintStatus, EvidenceFile,
    DATE_PLACEHOLDER,
};
use shared_ui::components::{
    Badge, Button, ButtonVariant, EmptyState, ExternalLink, Panel, PanelFooter,
    PanelList, PanelListItem, PanelSection,
};

/// Archival date of a complaint as `DD/MM/YYYY` in the calendar of `tz`,
/// or `"-"` when no candidate field is set or the value is not a date.
pub fn archived_date_label<Tz: TimeZone>(complaint: Option<&Complaint>, tz: &Tz) -> String {
    let Some(resolved) = resolve_archived_date(complaint) else {
        tracing::debug!("no archival date field set on complaint");
        return DATE_PLACEHOLDER.to_string();
    };

    let label = format_date_in(Some(resolved.value), tz);
    if label == DATE_PLACEHOLDER {
        tracing::warn!(
            field = resolved.field,
            value = %resolved.value,
            "archival date is not a parseable date"
        );
    } else {
        tracing::debug!(field = resolved.field, %label, "resolved archival date");
    }
    label
}

/// Fire the unarchive callback for one activation of the control.
pub fn request_unarchive(on_archive: &EventHandler<()>) {
    tracing::debug!("unarchive requested");
    on_archive.call(());
}

/// Click handler for the unarchive control. Generic over the event so the
/// same handler can be driven without a DOM event.
pub fn unarchive_on_click<E: 'static>(on_archive: EventHandler<()>) -> impl FnMut(E) + 'static {
    move |_: E| request_unarchive(&on_archive)
}

/// Read-only side panel for an archived complaint.
///
/// Shows categories, evidence files, current status and archival date, and
/// a single "Desarchivar" action. Every input may be absent; missing data
/// renders as placeholder text. The only effect is calling `on_archive`
/// when the action is clicked.
#[component]
pub fn ArchivedComplaintSidebar(
    #[props(!optional)] complaint: Option<Complaint>,
    #[props(!optional)] categorias: Option<Vec<Category>>,
    #[props(!optional)] files: Option<Vec<EvidenceFile>>,
    #[props(!optional)] estado: Option<ComplaintStatus>,
    on_archive: EventHandler<()>,
) -> Element {
    let categorias = categorias.unwrap_or_default();
    let files = files.unwrap_or_default();
    let archived_on = archived_date_label(complaint.as_ref(), &Local);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./archived_sidebar.css") }
        Panel { class: "archived-sidebar",
            PanelSection { title: "Categorías",
                if categorias.is_empty() {
                    EmptyState { "No hay categorías" }
                } else {
                    PanelList {
                        for category in categorias.iter() {
                            PanelListItem { key: "{category.id}", "{category.name}" }
                        }
                    }
                }
            }

            PanelSection { title: "Archivos de evidencia",
                if files.is_empty() {
                    EmptyState { "No hay archivos" }
                } else {
                    PanelList { class: "evidence-files",
                        for file in files.iter() {
                            PanelListItem { key: "{file.id}",
                                ExternalLink { href: file.url.clone(), "{file.display_name()}" }
                            }
                        }
                    }
                }
            }

            PanelSection { title: "Estado",
                match &estado {
                    Some(status) => rsx! {
                        Badge { "{status.name}" }
                    },
                    None => rsx! {
                        EmptyState { "No hay estado" }
                    },
                }
            }

            PanelSection { title: "Fecha de archivo",
                span { class: "archived-date", "{archived_on}" }
            }

            PanelFooter {
                Button {
                    variant: ButtonVariant::Primary,
                    class: "unarchive-button",
                    onclick: unarchive_on_click::<MouseEvent>(on_archive),
                    "Desarchivar"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shared_types::SidebarFixture;
    use std::cell::Cell;
    use std::rc::Rc;

    #[component]
    fn Harness(fixture: SidebarFixture) -> Element {
        rsx! {
            ArchivedComplaintSidebar {
                complaint: fixture.complaint,
                categorias: fixture.categorias,
                files: fixture.files,
                estado: fixture.estado,
                on_archive: move |_| {},
            }
        }
    }

    fn render(fixture: SidebarFixture) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { fixture });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn fixture(value: serde_json::Value) -> SidebarFixture {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_inputs_render_every_placeholder() {
        let html = render(SidebarFixture::default());
        assert!(html.contains("No hay categorías"));
        assert!(html.contains("No hay archivos"));
        assert!(html.contains("No hay estado"));
        assert!(html.contains(r#"<span class="archived-date">-</span>"#));
    }

    #[test]
    fn empty_category_list_renders_placeholder() {
        let html = render(fixture(json!({ "categorias": [] })));
        assert!(html.contains("No hay categorías"));
        assert!(!html.contains("panel-list-item"));
    }

    #[test]
    fn categories_render_one_item_each_in_order() {
        let html = render(fixture(json!({
            "categorias": [
                { "id": 3, "nombre": "Ruido" },
                { "id": 1, "nombre": "Basura" },
                { "id": 2, "nombre": "Alumbrado" }
            ]
        })));
        assert!(!html.contains("No hay categorías"));
        assert_eq!(html.matches(r#"class="panel-list-item""#).count(), 3);
        let ruido = html.find("Ruido").unwrap();
        let basura = html.find("Basura").unwrap();
        let alumbrado = html.find("Alumbrado").unwrap();
        assert!(ruido < basura && basura < alumbrado);
    }

    #[test]
    fn unnamed_file_gets_generated_label() {
        let html = render(fixture(json!({
            "files": [{ "id": 42, "url": "https://files.test/42" }]
        })));
        assert!(html.contains(">Archivo 42</a>"));
        assert!(html.contains(r#"href="https://files.test/42""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(!html.contains("No hay archivos"));
    }

    #[test]
    fn named_file_uses_its_name() {
        let html = render(fixture(json!({
            "files": [{ "id": "a1", "nombre": "acta.pdf", "url": "https://files.test/a1" }]
        })));
        assert!(html.contains(">acta.pdf</a>"));
        assert!(!html.contains("Archivo a1"));
    }

    #[test]
    fn status_name_is_shown() {
        let html = render(fixture(json!({ "estado": { "nombre": "Archivada" } })));
        assert!(html.contains(">Archivada</span>"));
        assert!(!html.contains("No hay estado"));
    }

    #[test]
    fn archival_date_is_rendered() {
        // Midday UTC keeps the calendar day stable across common offsets.
        let html = render(fixture(json!({
            "complaint": { "fechaArchivamiento": "2024-03-05T12:00:00Z" }
        })));
        assert!(html.contains(r#"<span class="archived-date">05/03/2024</span>"#));
    }

    #[test]
    fn exactly_one_unarchive_control() {
        let html = render(SidebarFixture::default());
        assert_eq!(html.matches("<button").count(), 1);
        assert!(html.contains(">Desarchivar</button>"));
    }

    #[test]
    fn label_follows_fallback_chain() {
        let only_created: Complaint =
            serde_json::from_value(json!({ "createdAt": "2023-12-31T10:00:00Z" })).unwrap();
        assert_eq!(archived_date_label(Some(&only_created), &Utc), "31/12/2023");

        let both: Complaint = serde_json::from_value(json!({
            "updatedAt": "2024-05-01T00:00:00Z",
            "fechaArchivamiento": "2024-03-05T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(archived_date_label(Some(&both), &Utc), "05/03/2024");
    }

    #[test]
    fn label_is_dash_for_missing_or_invalid() {
        assert_eq!(archived_date_label(None, &Utc), "-");
        let invalid: Complaint =
            serde_json::from_value(json!({ "fechaArchivamiento": "not-a-date" })).unwrap();
        assert_eq!(archived_date_label(Some(&invalid), &Utc), "-");
    }

    #[component]
    fn ClickHarness(hits: Rc<Cell<u32>>, presses: u32) -> Element {
        let on_archive = EventHandler::new(move |()| hits.set(hits.get() + 1));
        use_hook(move || {
            let mut onclick = unarchive_on_click::<()>(on_archive);
            for _ in 0..presses {
                onclick(());
            }
        });
        rsx! {}
    }

    fn count_calls(presses: u32) -> u32 {
        let hits = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new_with_props(
            ClickHarness,
            ClickHarnessProps {
                hits: hits.clone(),
                presses,
            },
        );
        dom.rebuild_in_place();
        hits.get()
    }

    #[test]
    fn each_activation_calls_on_archive_once() {
        assert_eq!(count_calls(0), 0);
        assert_eq!(count_calls(1), 1);
        assert_eq!(count_calls(3), 3);
    }
}
