//! Button Components
//!
//! - [`LinkButton`]: an `<a>` styled as a button
//! - [`IconButton`] and [`CloseButton`]: compact icon actions

use dioxus::prelude::*;

/// Class shared by every button-styled link.
const LINK_BUTTON_CLASS: &str = "btn-primary";

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// `target` and `rel` attributes for a link, set only for external links.
fn link_target(external: bool) -> (Option<&'static str>, Option<&'static str>) {
    if external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    }
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    /// Link content
    pub children: Element,
    /// Open in a new browsing context (adds `noopener noreferrer`)
    #[props(default = false)]
    pub external: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor styled as a button.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LinkButton {
///         href: "https://github.com/danishmasri74".to_string(),
///         external: true,
///         "GitHub"
///     }
/// }
/// ```
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = join_class(LINK_BUTTON_CLASS, props.class.as_deref());
    let (target, rel) = link_target(props.external);

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: target,
            rel: rel,
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_class(LINK_BUTTON_CLASS, None), "btn-primary");
        assert_eq!(join_class(LINK_BUTTON_CLASS, Some("")), "btn-primary");
        assert_eq!(join_class(LINK_BUTTON_CLASS, Some("mt-4")), "btn-primary mt-4");
    }

    #[test]
    fn external_links_open_without_opener() {
        assert_eq!(link_target(true), (Some("_blank"), Some("noopener noreferrer")));
        assert_eq!(link_target(false), (None, None));
    }
}
