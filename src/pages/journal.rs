//! Journal page - the alternate draft.
//!
//! The timeline wrapped in the tracing beam.

use dioxus::prelude::*;
use folio_ui::TracingBeam;

use crate::app::Route;
use crate::context::use_site_content;

#[component]
pub fn Journal() -> Element {
    let content = use_site_content();

    rsx! {
        main { class: "page",
            div { class: "page-content",
                header { class: "page-header fade-in",
                    h1 { class: "page-title", "My Timeline" }
                    nav { class: "page-nav",
                        Link { to: Route::Home {}, "Back to portfolio" }
                    }
                }

                TracingBeam { class: "journal-beam".to_string(),
                    div { class: "timeline",
                        for entry in content.timeline.iter() {
                            article { key: "{entry.title}", class: "timeline-entry",
                                h2 { class: "timeline-entry__title", "{entry.title}" }
                                p { class: "timeline-entry__text", "{entry.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
