//! Property-based tests for the grid state machine, the shared scroll lock
//! and the beam mappings.

use std::sync::Arc;

use folio_core::{
    card_cells, GridController, GridEvent, HoverItem, InstanceId, ScrollLock, ScrollLockTarget,
    StopMapping,
};
use parking_lot::Mutex;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const MAX_ITEMS: usize = 6;

fn event_strategy() -> impl Strategy<Value = GridEvent> {
    // Indices deliberately range past MAX_ITEMS to exercise ignored events
    let index = 0..MAX_ITEMS + 2;
    prop_oneof![
        3 => index.clone().prop_map(GridEvent::PointerEnter),
        3 => index.clone().prop_map(GridEvent::PointerLeave),
        3 => index.prop_map(GridEvent::Click),
        1 => Just(GridEvent::OutsideContainer),
        1 => Just(GridEvent::OutsideCard),
        1 => Just(GridEvent::Escape),
        1 => Just(GridEvent::Close),
    ]
}

/// Event addressed to one of two grids sharing a lock, or an unmount.
#[derive(Debug, Clone)]
enum SharedOp {
    Event(bool, GridEvent),
    Unmount(bool),
}

fn shared_op_strategy() -> impl Strategy<Value = SharedOp> {
    prop_oneof![
        8 => (any::<bool>(), event_strategy()).prop_map(|(first, e)| SharedOp::Event(first, e)),
        1 => any::<bool>().prop_map(SharedOp::Unmount),
    ]
}

/// Mirrors the body overflow flag.
#[derive(Clone, Default)]
struct Body(Arc<Mutex<bool>>);

impl ScrollLockTarget for Body {
    fn set_locked(&self, locked: bool) {
        let mut flag = self.0.lock();
        assert_ne!(*flag, locked, "target only sees real transitions");
        *flag = locked;
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The lock is held exactly while a card is active, after every event
    #[test]
    fn lock_tracks_active(
        count in 0..=MAX_ITEMS,
        events in prop::collection::vec(event_strategy(), 0..60),
    ) {
        let body = Body::default();
        let lock = ScrollLock::new(body.clone());
        let mut grid = GridController::new(lock.clone(), count);

        for event in events {
            grid.handle(event);
            prop_assert_eq!(grid.holds_lock(), grid.active().is_some());
            prop_assert_eq!(*body.0.lock(), grid.active().is_some());
            prop_assert!(grid.hovered().map_or(true, |i| i < count));
            prop_assert!(grid.active().map_or(true, |i| i < count));
        }

        drop(grid);
        prop_assert!(!lock.is_locked());
        prop_assert!(!*body.0.lock());
    }

    /// Two grids overlapping on one page never desynchronize the body flag
    #[test]
    fn shared_lock_is_union_of_grids(ops in prop::collection::vec(shared_op_strategy(), 0..80)) {
        let body = Body::default();
        let lock = ScrollLock::new(body.clone());
        let mut grids = [
            Some(GridController::new(lock.clone(), MAX_ITEMS)),
            Some(GridController::new(lock.clone(), MAX_ITEMS)),
        ];

        for op in ops {
            match op {
                SharedOp::Event(first, event) => {
                    let slot = &mut grids[usize::from(!first)];
                    let grid = slot.get_or_insert_with(|| GridController::new(lock.clone(), MAX_ITEMS));
                    grid.handle(event);
                }
                SharedOp::Unmount(first) => {
                    grids[usize::from(!first)] = None;
                }
            }

            let any_active = grids
                .iter()
                .flatten()
                .any(|grid| grid.active().is_some());
            prop_assert_eq!(lock.is_locked(), any_active);
            prop_assert_eq!(*body.0.lock(), any_active);
        }
    }

    /// The last pointer-enter always wins unless its own leave arrived
    #[test]
    fn hover_follows_latest_enter(first in 0..MAX_ITEMS, second in 0..MAX_ITEMS) {
        let mut grid = GridController::new(ScrollLock::detached(), MAX_ITEMS);
        grid.handle(GridEvent::PointerEnter(first));
        grid.handle(GridEvent::PointerEnter(second));
        if first != second {
            grid.handle(GridEvent::PointerLeave(first));
        }
        prop_assert_eq!(grid.hovered(), Some(second));
    }

    /// Outside clicks on an idle grid change nothing
    #[test]
    fn idle_outside_click_is_noop(count in 0..=MAX_ITEMS, repeats in 1..5usize) {
        let mut grid = GridController::new(ScrollLock::detached(), count);
        let before = grid.state().clone();
        for _ in 0..repeats {
            grid.handle(GridEvent::OutsideContainer);
            grid.handle(GridEvent::OutsideCard);
            grid.handle(GridEvent::Escape);
        }
        prop_assert_eq!(grid.state(), &before);
        prop_assert!(!grid.holds_lock());
    }

    /// One cell per item, in input order
    #[test]
    fn cells_match_items(titles in prop::collection::vec("[a-zA-Z0-9 ]{0,20}", 0..12)) {
        let items: Vec<HoverItem<String>> =
            titles.iter().map(|t| HoverItem::new(t.clone(), "")).collect();
        let cells = card_cells(&items, None, None, InstanceId::next());
        prop_assert_eq!(cells.len(), items.len());
        for (cell, title) in cells.iter().zip(&titles) {
            prop_assert_eq!(cell.title, title.as_str());
        }
    }

    /// Every stop mapping is non-decreasing on [0, 1]
    #[test]
    fn mappings_are_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for mapping in StopMapping::BEAM {
            prop_assert!(mapping.map(lo) <= mapping.map(hi));
        }
    }
}
