use dioxus::prelude::*;
use folio_ui::page_scroll_lock;

use crate::context::get_site_content;
use crate::pages::{Home, Journal};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Portfolio: about, projects grid, tech stack
/// - `/journal` - Timeline draft wrapped in the tracing beam
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/journal")]
    Journal {},
}

/// Root application component.
///
/// Provides global styles, site content, motion settings and the shared
/// page scroll lock, then hands over to the router.
#[component]
pub fn App() -> Element {
    let content = use_hook(get_site_content);

    use_context_provider(|| content.motion);
    use_context_provider(page_scroll_lock);
    use_context_provider(|| content);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
