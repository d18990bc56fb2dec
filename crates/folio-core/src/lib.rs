//! Folio Core
//!
//! Framework-free state behind the portfolio widgets:
//!
//! - [`grid`]: hover/active interaction state of the hover card grid
//! - [`scroll_lock`]: reference-counted page scroll lock shared by all overlays
//! - [`beam`]: scroll progress → gradient offsets → spring smoothing → path geometry
//! - [`content`]: site content and motion settings loaded from JSON
//!
//! Nothing here touches the DOM. The UI crate feeds events in and renders
//! the models that come out, which keeps every transition testable.

pub mod beam;
pub mod content;
pub mod error;
pub mod grid;
pub mod scroll_lock;

pub use beam::{
    scroll_progress, BeamGeometry, BeamPipeline, ContentHeight, ElementBox, GradientStops,
    Spring, SpringConfig, StopMapping,
};
pub use content::{ContactLink, ProjectEntry, SiteContent, StackEntry, TimelineEntry};
pub use error::{FolioError, Result};
pub use grid::{
    card_cells, morph_key, overlay_model, ActiveTransition, CallToAction, CardCell, GridController,
    GridEvent, GridState, HoverItem, InstanceId, ItemContent, MorphKeys, MorphKind, OverlayModel,
    transition_style, VIEW_PROJECT_LABEL,
};
pub use scroll_lock::{NoopTarget, ScrollLock, ScrollLockGuard, ScrollLockTarget};
