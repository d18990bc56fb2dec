//! Tracing beam animation pipeline.
//!
//! ```text
//! element box ──scroll_progress──▶ p ──StopMapping×3──▶ targets ──Spring×3──▶ offsets ──▶ GradientStops
//! content height ──ContentHeight──▶ BeamGeometry
//! ```
//!
//! Each stage is a plain value so the filter state can be inspected and
//! injected in tests instead of living inside a framework hook.

mod geometry;
mod mapping;
mod pipeline;
mod scroll;
mod spring;

pub use geometry::{BeamGeometry, ContentHeight, GradientStops};
pub use mapping::StopMapping;
pub use pipeline::BeamPipeline;
pub use scroll::{scroll_progress, ElementBox};
pub use spring::{Spring, SpringConfig, MAX_TICK};
