//! Folio UI Components
//!
//! Dioxus widgets for the portfolio pages:
//!
//! - [`HoverEffect`]: card grid with a shared hover highlight and a
//!   click-to-expand overlay that locks page scrolling while open
//! - [`TracingBeam`]: vertical guide path whose gradient follows scroll
//!   progress through the wrapped content
//!
//! State transitions live in `folio-core`; this crate wires DOM events to
//! them through the hooks in [`hooks`].

mod bridge;
pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
