//! Home page - the portfolio itself.
//!
//! Header, about, projects in the hover card grid, the tech stack and the
//! contact footer.

use std::sync::atomic::{AtomicBool, Ordering};

use dioxus::prelude::*;
use folio_core::{ItemContent, ProjectEntry};
use folio_ui::{CardItem, HoverEffect};

use crate::app::Route;
use crate::context::{get_start_page, use_site_content, StartPage};

/// Set once the --page redirect has been honored.
static START_PAGE_APPLIED: AtomicBool = AtomicBool::new(false);

/// Card item with the project's tech tags as lazily built overlay content.
fn project_card(project: &ProjectEntry) -> CardItem {
    let item: CardItem = project.to_item();
    if project.tech.is_empty() {
        return item;
    }
    let tech = project.tech.clone();
    item.with_content(ItemContent::lazy(move || {
        rsx! {
            ul { class: "tech-tags",
                for tag in tech.iter() {
                    li { key: "{tag}", class: "tech-tag", "{tag}" }
                }
            }
        }
    }))
}

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let content = use_site_content();
    let projects = use_hook(|| content.projects.iter().map(project_card).collect::<Vec<_>>());

    // Honor --page journal on first load only
    use_effect(move || {
        if get_start_page() == StartPage::Journal
            && !START_PAGE_APPLIED.swap(true, Ordering::Relaxed)
        {
            tracing::info!("Opening journal page as requested");
            navigator.push(Route::Journal {});
        }
    });

    rsx! {
        main { class: "page",
            div { class: "page-grid-bg" }

            div { class: "page-content",
                header { class: "page-header fade-in",
                    h1 { class: "page-title", "Hey, I'm " span { class: "cover", "{content.name}" } }
                    p { class: "tagline", "{content.tagline}" }
                    nav { class: "page-nav",
                        Link { to: Route::Journal {}, "Read the timeline" }
                    }
                }

                section { class: "section about",
                    h2 { class: "section-title", "About Me" }
                    for paragraph in content.about.iter() {
                        p { "{paragraph}" }
                    }
                }

                section { class: "section",
                    h2 { class: "section-title", "Projects" }
                    HoverEffect { items: projects, class: "projects-grid".to_string() }
                }

                section { class: "section",
                    h2 { class: "section-title", "Tech Stack" }
                    div { class: "stack-grid",
                        for stack in content.stacks.iter() {
                            div { key: "{stack.title}", class: "stack-card",
                                h3 { class: "stack-card__title", "{stack.title}" }
                                ul { class: "stack-card__items",
                                    for tech in stack.items.iter() {
                                        li { key: "{tech}", class: "tech-tag", "{tech}" }
                                    }
                                }
                            }
                        }
                    }
                }

                footer { class: "page-footer",
                    p { class: "page-footer__note", "{content.contact_note}" }
                    div { class: "page-footer__links",
                        for contact in content.contacts.iter() {
                            {
                                let (target, rel) = if contact.is_external() {
                                    (Some("_blank"), Some("noopener noreferrer"))
                                } else {
                                    (None, None)
                                };
                                rsx! {
                                    a {
                                        key: "{contact.href}",
                                        class: "page-footer__link",
                                        href: "{contact.href}",
                                        target: target,
                                        rel: rel,
                                        "{contact.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
