//! Hooks bridging page events into component state.
//!
//! Each hook installs exactly one page listener when the component mounts
//! and removes it from `use_drop`, so no global handler outlives its owner.

mod element_height;
mod global_key;
mod outside_click;
mod scroll_lock;
mod scroll_progress;

pub use element_height::use_element_height;
pub use global_key::use_global_keydown;
pub use outside_click::use_outside_click;
pub use scroll_lock::{page_scroll_lock, use_scroll_lock, BodyOverflow};
pub use scroll_progress::use_scroll_progress;
