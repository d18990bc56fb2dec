//! Hover Effect Card Grid
//!
//! Grid of cards sharing one hover highlight. Clicking a card expands it
//! into a centered overlay; the overlay closes on an outside click, Escape,
//! or the close button, and page scrolling is locked while it is open.

use dioxus::prelude::*;
use folio_core::{
    card_cells, overlay_model, transition_style, GridController, GridEvent, HoverItem, InstanceId,
    ItemContent, MorphKeys,
};

use crate::components::{CloseButton, LinkButton};
use crate::hooks::{use_global_keydown, use_outside_click, use_scroll_lock};

/// A grid card whose optional overlay content is a Dioxus element.
pub type CardItem = HoverItem<Element>;

/// Feed `event` to the grid, writing the signal only when state changes.
fn dispatch(mut grid: Signal<GridController>, event: GridEvent) {
    let changes = {
        let current = grid.peek();
        let mut next = current.state().clone();
        next.apply(event);
        &next != current.state()
    };
    if changes {
        grid.write().handle(event);
    }
}

/// `view-transition-name` styles for the four morphing parts of a card.
#[derive(Clone, Debug, Default, PartialEq)]
struct MorphStyles {
    card: String,
    image: String,
    title: String,
    description: String,
}

impl MorphStyles {
    fn new(keys: Option<&MorphKeys>) -> Self {
        keys.map(|keys| Self {
            card: transition_style(&keys.card),
            image: transition_style(&keys.image),
            title: transition_style(&keys.title),
            description: transition_style(&keys.description),
        })
        .unwrap_or_default()
    }
}

/// Element ids used by the outside-click detectors of one grid.
#[derive(Clone, Debug, PartialEq)]
struct GridIds {
    container: String,
    card: String,
}

impl GridIds {
    fn new(instance: InstanceId) -> Self {
        Self {
            container: format!("hover-grid-{instance}"),
            card: format!("hover-card-{instance}"),
        }
    }
}

/// Card grid with hover highlight and expandable overlay.
///
/// # Example
///
/// ```rust,ignore
/// let items = vec![
///     CardItem::new("Engine", "Toy renderer").with_link("https://example.com"),
///     CardItem::new("Notes", "Offline editor")
///         .with_content(ItemContent::lazy(|| rsx! { p { "Rust, SQLite" } })),
/// ];
///
/// rsx! { HoverEffect { items } }
/// ```
#[component]
pub fn HoverEffect(
    /// Cards, rendered in order
    items: Vec<CardItem>,
    /// Extra classes for the grid container
    #[props(default)]
    class: Option<String>,
) -> Element {
    let instance = use_hook(InstanceId::next);
    let ids = use_hook(|| GridIds::new(instance));
    let lock = use_scroll_lock();
    let initial_count = items.len();
    let grid = use_signal(move || GridController::new(lock, initial_count));

    // Items may be swapped by the parent; stale indices are dropped.
    use_effect(use_reactive((&items.len(),), move |(count,)| {
        if grid.peek().state().item_count() != count {
            let mut grid = grid;
            grid.write().set_item_count(count);
        }
    }));

    use_outside_click(&ids.container, move || dispatch(grid, GridEvent::OutsideContainer));
    use_outside_click(&ids.card, move || dispatch(grid, GridEvent::OutsideCard));
    use_global_keydown("Escape", move || dispatch(grid, GridEvent::Escape));

    use_drop(move || {
        let mut grid = grid;
        if let Ok(mut controller) = grid.try_write() {
            controller.teardown();
        };
    });

    let hovered = grid.read().hovered();
    let active_index = grid.read().active();
    let active = grid.read().active_item(&items).cloned();
    let cells = card_cells(&items, hovered, active_index, instance);
    let grid_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("hover-grid {extra}"),
        _ => "hover-grid".to_string(),
    };

    rsx! {
        if let Some(item) = active {
            div { class: "hover-backdrop" }
            div { class: "hover-overlay",
                ExpandedCard {
                    item,
                    card_id: ids.card.clone(),
                    instance,
                    on_close: move |_| dispatch(grid, GridEvent::Close),
                }
            }
        }

        div {
            id: "{ids.container}",
            class: "{grid_class}",

            for cell in cells {
                {
                    let index = cell.index;
                    let morph = MorphStyles::new(cell.morph.as_ref());
                    let title = cell.title.to_string();
                    let description = cell.description.to_string();
                    rsx! {
                        div {
                            key: "{cell.key}",
                            class: "hover-card",
                            style: "{morph.card}",
                            onmouseenter: move |_| dispatch(grid, GridEvent::PointerEnter(index)),
                            onmouseleave: move |_| dispatch(grid, GridEvent::PointerLeave(index)),
                            onclick: move |_| dispatch(grid, GridEvent::Click(index)),

                            if let Some(src) = cell.image {
                                img {
                                    class: "hover-card__image",
                                    style: "{morph.image}",
                                    src: "{src}",
                                    alt: "{title}",
                                }
                            }

                            div { class: "hover-card__body",
                                h4 {
                                    class: "hover-card__title",
                                    style: "{morph.title}",
                                    "{title}"
                                }
                                p {
                                    class: "hover-card__description",
                                    style: "{morph.description}",
                                    "{description}"
                                }
                            }

                            if cell.highlighted {
                                span { class: "hover-card__highlight" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The active card expanded into the overlay.
#[component]
fn ExpandedCard(
    item: CardItem,
    card_id: String,
    instance: InstanceId,
    on_close: EventHandler<()>,
) -> Element {
    let model = overlay_model(&item, instance);
    let morph = MorphStyles::new(Some(&model.keys));
    // Lazy content is produced here, only once the card is open.
    let content = item.content.as_ref().map(ItemContent::resolve);

    rsx! {
        div {
            id: "{card_id}",
            class: "expanded-card",
            "role": "dialog",
            "aria-modal": "true",
            "aria-label": "{model.title}",
            style: "{morph.card}",

            div { class: "expanded-card__close",
                CloseButton { onclick: move |_| on_close.call(()) }
            }

            if let Some(src) = model.image {
                img {
                    class: "expanded-card__image",
                    style: "{morph.image}",
                    src: "{src}",
                    alt: "{model.title}",
                }
            }

            div { class: "expanded-card__body",
                h3 {
                    class: "expanded-card__title",
                    style: "{morph.title}",
                    "{model.title}"
                }
                p {
                    class: "expanded-card__description",
                    style: "{morph.description}",
                    "{model.description}"
                }

                if let Some(cta) = model.call_to_action {
                    div { class: "expanded-card__action",
                        LinkButton {
                            href: cta.href.to_string(),
                            external: true,
                            "{cta.label}"
                        }
                    }
                }

                if let Some(content) = content {
                    div { class: "expanded-card__content", {content} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_ids_are_per_instance() {
        let a = GridIds::new(InstanceId::next());
        let b = GridIds::new(InstanceId::next());
        assert_ne!(a.container, b.container);
        assert_ne!(a.card, b.card);
        assert!(a.container.starts_with("hover-grid-"));
    }

    #[test]
    fn morph_styles_name_every_part() {
        let item: CardItem = CardItem::new("Gamer Guide", "Walkthroughs");
        let keys = MorphKeys::for_item(&item, InstanceId::next());
        let styles = MorphStyles::new(Some(&keys));
        assert_eq!(styles.card, format!("view-transition-name: {}", keys.card));
        assert_eq!(styles.image, format!("view-transition-name: {}", keys.image));
        assert_eq!(styles.title, format!("view-transition-name: {}", keys.title));
        assert_eq!(
            styles.description,
            format!("view-transition-name: {}", keys.description)
        );
    }

    #[test]
    fn cell_without_keys_has_no_transition_name() {
        assert_eq!(MorphStyles::new(None), MorphStyles::default());
    }
}
