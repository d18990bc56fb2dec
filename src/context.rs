//! Context providers for the portfolio pages.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| content);
//!
//! // In pages
//! let content = use_site_content();
//! ```

use dioxus::prelude::*;
use folio_core::SiteContent;

pub use crate::StartPage;

/// Site content loaded at startup.
pub fn get_site_content() -> SiteContent {
    crate::get_site_content()
}

/// Page requested on the command line.
pub fn get_start_page() -> StartPage {
    crate::get_start_page()
}

/// Hook to access the site content from context.
pub fn use_site_content() -> SiteContent {
    use_context::<SiteContent>()
}
