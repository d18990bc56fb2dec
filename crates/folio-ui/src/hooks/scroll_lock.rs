use std::sync::OnceLock;

use dioxus::prelude::*;
use folio_core::{ScrollLock, ScrollLockTarget};

use crate::bridge;

/// Locks the page by toggling `overflow` on the document body.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyOverflow;

impl ScrollLockTarget for BodyOverflow {
    fn set_locked(&self, locked: bool) {
        bridge::set_body_scroll_locked(locked);
    }
}

static PAGE_LOCK: OnceLock<ScrollLock> = OnceLock::new();

/// The process-wide body scroll lock.
pub fn page_scroll_lock() -> ScrollLock {
    PAGE_LOCK.get_or_init(|| ScrollLock::new(BodyOverflow)).clone()
}

/// Scroll lock from context, or the process-wide one if none is provided.
pub fn use_scroll_lock() -> ScrollLock {
    use_hook(|| try_consume_context::<ScrollLock>().unwrap_or_else(page_scroll_lock))
}
