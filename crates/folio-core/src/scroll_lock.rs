//! Page scroll lock shared by every overlay-capable widget.
//!
//! The lock is reference counted: the target is switched on when the first
//! guard is acquired and switched off when the last guard is dropped. Two
//! grids opening and closing overlays in any interleaving therefore never
//! leave the page stuck locked or unlocked early.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Whatever actually suppresses page scrolling (the document body in the UI).
pub trait ScrollLockTarget: Send + Sync {
    /// Apply or remove the lock. Called only on 0→1 and 1→0 transitions.
    fn set_locked(&self, locked: bool);
}

/// Target that does nothing; used when no document is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTarget;

impl ScrollLockTarget for NoopTarget {
    fn set_locked(&self, _locked: bool) {}
}

struct Inner {
    holders: usize,
    target: Box<dyn ScrollLockTarget>,
}

/// Cloneable handle to the process-wide lock coordinator.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Arc<Mutex<Inner>>,
}

impl ScrollLock {
    pub fn new(target: impl ScrollLockTarget + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                holders: 0,
                target: Box::new(target),
            })),
        }
    }

    /// Coordinator without a target, for headless use.
    pub fn detached() -> Self {
        Self::new(NoopTarget)
    }

    /// Register a lock requester. The returned guard releases on drop.
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut inner = self.inner.lock();
        inner.holders += 1;
        if inner.holders == 1 {
            tracing::debug!("scroll lock engaged");
            inner.target.set_locked(true);
        }
        ScrollLockGuard {
            lock: self.clone(),
            released: false,
        }
    }

    /// Whether at least one guard is alive.
    pub fn is_locked(&self) -> bool {
        self.inner.lock().holders > 0
    }

    /// Number of live guards.
    pub fn holders(&self) -> usize {
        self.inner.lock().holders
    }

    fn release(&self) {
        let mut inner = self.inner.lock();
        match inner.holders {
            0 => tracing::warn!("scroll lock released with no holders"),
            1 => {
                inner.holders = 0;
                tracing::debug!("scroll lock released");
                inner.target.set_locked(false);
            }
            _ => inner.holders -= 1,
        }
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::detached()
    }
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

/// Scoped lock acquisition. Dropping it (or calling [`release`]) gives the
/// lock back exactly once.
///
/// [`release`]: ScrollLockGuard::release
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    lock: ScrollLock,
    released: bool,
}

impl ScrollLockGuard {
    /// Release now instead of at drop.
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.lock.release();
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("released", &self.released)
            .finish()
    }
}
