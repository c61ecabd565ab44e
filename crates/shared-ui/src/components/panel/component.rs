use dioxus::prelude::*;

// ─── Layout components ─────────────────────────────────────────────────

/// A fixed, read-only side panel for record metadata.
///
/// Unlike a navigation sidebar it has no open/closed state; the host page
/// decides where it sits.
#[component]
pub fn Panel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "panel", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Titled section inside a Panel.
#[component]
pub fn PanelSection(
    /// Section heading (e.g. "Categorías").
    title: &'static str,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "panel-section", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        section {
            ..merged,
            h4 { class: "panel-section-title", "{title}" }
            div { class: "panel-section-body", {children} }
        }
    }
}

/// Footer area of a Panel, for actions.
#[component]
pub fn PanelFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "panel-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── List components ───────────────────────────────────────────────────

/// Bulleted list inside a PanelSection.
#[component]
pub fn PanelList(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "panel-list", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

/// A single entry in a PanelList. Highlights on hover.
#[component]
pub fn PanelListItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "panel-list-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}
