//! Reusable portfolio widgets.

mod button;
mod hover_effect;
mod tracing_beam;

pub use button::*;
pub use hover_effect::*;
pub use tracing_beam::*;
