use dioxus::prelude::*;

/// Link that always opens in a new browsing context.
///
/// Carries `rel="noopener noreferrer"` so the opened page gets no handle
/// back to this window.
#[component]
pub fn ExternalLink(
    /// Link target.
    href: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "external-link", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        a {
            href: "{href}",
            target: "_blank",
            rel: "noopener noreferrer",
            ..merged,
            {children}
        }
    }
}
