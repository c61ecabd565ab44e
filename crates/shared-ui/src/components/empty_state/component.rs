use dioxus::prelude::*;

/// Muted placeholder line shown when a section has nothing to list.
#[component]
pub fn EmptyState(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "empty-state", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        p {
            ..merged,
            {children}
        }
    }
}
