//! Hover card grid interaction state.
//!
//! Two independent pieces of state live here: which card shows the shared
//! hover highlight, and which card (if any) is expanded into the overlay.
//! [`GridController`] ties the active card to a [`ScrollLockGuard`] so the
//! page is locked exactly while an overlay is open, whichever way it closes.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Label of the call-to-action shown for items with a link.
pub const VIEW_PROJECT_LABEL: &str = "View Project";

// ============================================================================
// Items
// ============================================================================

/// Extra overlay content: either a ready value or a producer that is only
/// invoked when the overlay is rendered.
pub enum ItemContent<C> {
    Static(Rc<C>),
    Lazy(Rc<dyn Fn() -> C>),
}

impl<C> ItemContent<C> {
    pub fn value(value: C) -> Self {
        ItemContent::Static(Rc::new(value))
    }

    pub fn lazy(producer: impl Fn() -> C + 'static) -> Self {
        ItemContent::Lazy(Rc::new(producer))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, ItemContent::Lazy(_))
    }

    /// Obtain the content, running the producer for lazy content.
    pub fn resolve(&self) -> C
    where
        C: Clone,
    {
        match self {
            ItemContent::Static(value) => C::clone(value),
            ItemContent::Lazy(producer) => producer(),
        }
    }
}

impl<C> Clone for ItemContent<C> {
    fn clone(&self) -> Self {
        match self {
            ItemContent::Static(value) => ItemContent::Static(Rc::clone(value)),
            ItemContent::Lazy(producer) => ItemContent::Lazy(Rc::clone(producer)),
        }
    }
}

/// Identity comparison: two contents are equal when they share an allocation.
impl<C> PartialEq for ItemContent<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ItemContent::Static(a), ItemContent::Static(b)) => Rc::ptr_eq(a, b),
            (ItemContent::Lazy(a), ItemContent::Lazy(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<C> fmt::Debug for ItemContent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemContent::Static(_) => f.write_str("ItemContent::Static(..)"),
            ItemContent::Lazy(_) => f.write_str("ItemContent::Lazy(..)"),
        }
    }
}

/// One card of the grid. Rendered in slice order.
pub struct HoverItem<C> {
    pub title: String,
    pub description: String,
    /// Project URL; empty means "no call-to-action".
    pub link: String,
    pub image: Option<String>,
    pub content: Option<ItemContent<C>>,
}

impl<C> HoverItem<C> {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: String::new(),
            image: None,
            content: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_content(mut self, content: ItemContent<C>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }

    /// Image source, if there is one worth rendering.
    pub fn image_src(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }
}

impl<C> Clone for HoverItem<C> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
            image: self.image.clone(),
            content: self.content.clone(),
        }
    }
}

impl<C> PartialEq for HoverItem<C> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.link == other.link
            && self.image == other.image
            && self.content == other.content
    }
}

impl<C> fmt::Debug for HoverItem<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverItem")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("link", &self.link)
            .field("image", &self.image)
            .field("content", &self.content)
            .finish()
    }
}

// ============================================================================
// Morph identity
// ============================================================================

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Process-unique id of one mounted grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    pub fn next() -> Self {
        InstanceId(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Which part of a card a morph key names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphKind {
    Card,
    Image,
    Title,
    Description,
}

impl MorphKind {
    fn prefix(&self) -> &'static str {
        match self {
            MorphKind::Card => "card",
            MorphKind::Image => "image",
            MorphKind::Title => "title",
            MorphKind::Description => "description",
        }
    }
}

/// Shared visual identity of a grid cell part and its overlay counterpart.
///
/// Purely cosmetic. The result is a valid CSS identifier so it can be used
/// as a `view-transition-name`.
pub fn morph_key(kind: MorphKind, text: &str, instance: InstanceId) -> String {
    let mut key = String::with_capacity(text.len() + 16);
    key.push_str(kind.prefix());
    key.push('-');
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            key.push(ch);
        } else {
            key.push('_');
        }
    }
    key.push('-');
    key.push_str(&instance.to_string());
    key
}

/// The four morph keys of one item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorphKeys {
    pub card: String,
    pub image: String,
    pub title: String,
    pub description: String,
}

impl MorphKeys {
    pub fn for_item<C>(item: &HoverItem<C>, instance: InstanceId) -> Self {
        Self {
            card: morph_key(MorphKind::Card, &item.title, instance),
            image: morph_key(MorphKind::Image, &item.title, instance),
            title: morph_key(MorphKind::Title, &item.title, instance),
            description: morph_key(MorphKind::Description, &item.description, instance),
        }
    }
}

/// Inline style that names `key` as the element's view transition.
pub fn transition_style(key: &str) -> String {
    format!("view-transition-name: {key}")
}

// ============================================================================
// State machine
// ============================================================================

/// Discrete inputs to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridEvent {
    PointerEnter(usize),
    PointerLeave(usize),
    Click(usize),
    /// Pointer-down outside the grid container.
    OutsideContainer,
    /// Pointer-down outside the expanded overlay card.
    OutsideCard,
    Escape,
    Close,
}

/// How the active card changed in response to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveTransition {
    Unchanged,
    Opened(usize),
    Switched { from: usize, to: usize },
    Closed(usize),
}

/// Hover and active indices of one grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridState {
    hovered: Option<usize>,
    active: Option<usize>,
    item_count: usize,
}

impl GridState {
    pub fn new(item_count: usize) -> Self {
        Self {
            hovered: None,
            active: None,
            item_count,
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Apply one event. Events naming an index past the end are ignored.
    pub fn apply(&mut self, event: GridEvent) -> ActiveTransition {
        let before = self.active;
        match event {
            GridEvent::PointerEnter(index) if index < self.item_count => {
                self.hovered = Some(index);
            }
            GridEvent::PointerLeave(index) => {
                // A late leave from a card the pointer already left must not
                // clear the hover of the card it entered since.
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
            }
            GridEvent::Click(index) if index < self.item_count => {
                self.active = Some(index);
            }
            GridEvent::OutsideContainer => self.hovered = None,
            GridEvent::OutsideCard | GridEvent::Escape | GridEvent::Close => self.active = None,
            GridEvent::PointerEnter(_) | GridEvent::Click(_) => {}
        }
        transition(before, self.active)
    }

    /// Items were replaced; drop indices that no longer exist.
    pub fn set_item_count(&mut self, item_count: usize) -> ActiveTransition {
        let before = self.active;
        self.item_count = item_count;
        if self.hovered.is_some_and(|i| i >= item_count) {
            self.hovered = None;
        }
        if self.active.is_some_and(|i| i >= item_count) {
            self.active = None;
        }
        transition(before, self.active)
    }
}

fn transition(before: Option<usize>, after: Option<usize>) -> ActiveTransition {
    match (before, after) {
        (None, Some(to)) => ActiveTransition::Opened(to),
        (Some(from), None) => ActiveTransition::Closed(from),
        (Some(from), Some(to)) if from != to => ActiveTransition::Switched { from, to },
        _ => ActiveTransition::Unchanged,
    }
}

/// Grid state plus the scroll lock it owns while a card is active.
///
/// The guard is held iff a card is active. Dropping the controller (the
/// widget unmounting) releases the guard.
#[derive(Debug)]
pub struct GridController {
    state: GridState,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl GridController {
    pub fn new(lock: ScrollLock, item_count: usize) -> Self {
        Self {
            state: GridState::new(item_count),
            lock,
            guard: None,
        }
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn hovered(&self) -> Option<usize> {
        self.state.hovered
    }

    pub fn active(&self) -> Option<usize> {
        self.state.active
    }

    /// Whether this grid currently holds the page scroll lock.
    pub fn holds_lock(&self) -> bool {
        self.guard.is_some()
    }

    pub fn active_item<'a, C>(&self, items: &'a [HoverItem<C>]) -> Option<&'a HoverItem<C>> {
        self.state.active.and_then(|index| items.get(index))
    }

    pub fn handle(&mut self, event: GridEvent) -> ActiveTransition {
        let transition = self.state.apply(event);
        if transition != ActiveTransition::Unchanged {
            tracing::debug!(?event, ?transition, "grid active card changed");
        }
        self.sync_lock();
        transition
    }

    pub fn set_item_count(&mut self, item_count: usize) -> ActiveTransition {
        let transition = self.state.set_item_count(item_count);
        self.sync_lock();
        transition
    }

    /// Clear everything and give the lock back. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.state.hovered = None;
        self.state.active = None;
        self.sync_lock();
    }

    fn sync_lock(&mut self) {
        match (self.state.active.is_some(), self.guard.is_some()) {
            (true, false) => self.guard = Some(self.lock.acquire()),
            (false, true) => {
                if let Some(guard) = self.guard.take() {
                    guard.release();
                }
            }
            _ => {}
        }
    }
}

// ============================================================================
// Render models
// ============================================================================

/// What one grid cell renders.
#[derive(Clone, Debug, PartialEq)]
pub struct CardCell<'a> {
    pub index: usize,
    /// Stable list key (link plus position).
    pub key: String,
    pub title: &'a str,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub highlighted: bool,
    /// Morph keys, absent on the active cell while its overlay carries them.
    pub morph: Option<MorphKeys>,
}

/// One cell per item, in input order.
///
/// The active cell hands its morph keys to the overlay, so every
/// transition name appears on one element at a time.
pub fn card_cells<C>(
    items: &[HoverItem<C>],
    hovered: Option<usize>,
    active: Option<usize>,
    instance: InstanceId,
) -> Vec<CardCell<'_>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CardCell {
            index,
            key: format!("{}-{}", item.link, index),
            title: &item.title,
            description: &item.description,
            image: item.image_src(),
            highlighted: hovered == Some(index),
            morph: (active != Some(index)).then(|| MorphKeys::for_item(item, instance)),
        })
        .collect()
}

/// Link button of the expanded card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallToAction<'a> {
    pub label: &'static str,
    pub href: &'a str,
    pub target: &'static str,
    pub rel: &'static str,
}

/// What the expanded overlay renders for the active item.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayModel<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image: Option<&'a str>,
    pub call_to_action: Option<CallToAction<'a>>,
    pub has_content: bool,
    pub keys: MorphKeys,
}

pub fn overlay_model<C>(item: &HoverItem<C>, instance: InstanceId) -> OverlayModel<'_> {
    OverlayModel {
        title: &item.title,
        description: &item.description,
        image: item.image_src(),
        call_to_action: item.has_link().then(|| CallToAction {
            label: VIEW_PROJECT_LABEL,
            href: &item.link,
            target: "_blank",
            rel: "noopener noreferrer",
        }),
        has_content: item.content.is_some(),
        keys: MorphKeys::for_item(item, instance),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::scroll_lock::tests::Recorder;

    fn items(n: usize) -> Vec<HoverItem<String>> {
        (0..n)
            .map(|i| HoverItem::new(format!("Item {i}"), format!("desc {i}")))
            .collect()
    }

    #[test]
    fn enter_replaces_previous_hover() {
        let mut state = GridState::new(3);
        state.apply(GridEvent::PointerEnter(0));
        state.apply(GridEvent::PointerEnter(2));
        assert_eq!(state.hovered(), Some(2));
    }

    #[test]
    fn stale_leave_does_not_clear_newer_hover() {
        let mut state = GridState::new(3);
        state.apply(GridEvent::PointerEnter(0));
        state.apply(GridEvent::PointerEnter(1));
        state.apply(GridEvent::PointerLeave(0));
        assert_eq!(state.hovered(), Some(1));

        state.apply(GridEvent::PointerLeave(1));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn click_replaces_active() {
        let mut state = GridState::new(3);
        assert_eq!(state.apply(GridEvent::Click(0)), ActiveTransition::Opened(0));
        assert_eq!(
            state.apply(GridEvent::Click(2)),
            ActiveTransition::Switched { from: 0, to: 2 }
        );
        assert_eq!(state.apply(GridEvent::Click(2)), ActiveTransition::Unchanged);
        assert_eq!(state.active(), Some(2));
    }

    #[test]
    fn out_of_range_events_are_ignored() {
        let mut state = GridState::new(2);
        assert_eq!(state.apply(GridEvent::Click(5)), ActiveTransition::Unchanged);
        state.apply(GridEvent::PointerEnter(9));
        assert_eq!(state, GridState::new(2));
    }

    #[test]
    fn hover_and_active_are_independent() {
        let mut state = GridState::new(3);
        state.apply(GridEvent::PointerEnter(1));
        state.apply(GridEvent::Click(1));
        state.apply(GridEvent::PointerLeave(1));
        assert_eq!(state.hovered(), None);
        assert_eq!(state.active(), Some(1));

        state.apply(GridEvent::PointerEnter(0));
        state.apply(GridEvent::Escape);
        assert_eq!(state.hovered(), Some(0));
        assert_eq!(state.active(), None);
    }

    #[test]
    fn shrinking_items_clears_stale_indices() {
        let mut state = GridState::new(4);
        state.apply(GridEvent::PointerEnter(3));
        state.apply(GridEvent::Click(3));
        assert_eq!(state.set_item_count(2), ActiveTransition::Closed(3));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn controller_holds_lock_while_active() {
        let rec = Recorder::default();
        let lock = ScrollLock::new(rec.clone());
        let mut grid = GridController::new(lock.clone(), 3);

        grid.handle(GridEvent::Click(0));
        grid.handle(GridEvent::Click(1));
        assert!(lock.is_locked());
        assert_eq!(lock.holders(), 1, "switching cards does not stack locks");

        grid.handle(GridEvent::OutsideCard);
        assert!(!lock.is_locked());
        grid.handle(GridEvent::Close);
        assert_eq!(*rec.0.lock(), vec![true, false]);
    }

    #[test]
    fn dropping_controller_releases_lock() {
        let lock = ScrollLock::detached();
        let mut grid = GridController::new(lock.clone(), 1);
        grid.handle(GridEvent::Click(0));
        drop(grid);
        assert!(!lock.is_locked());
    }

    #[test]
    fn teardown_is_idempotent() {
        let lock = ScrollLock::detached();
        let mut grid = GridController::new(lock.clone(), 1);
        grid.handle(GridEvent::Click(0));
        grid.teardown();
        grid.teardown();
        assert_eq!(lock.holders(), 0);
        assert!(!grid.holds_lock());
    }

    #[test]
    fn lazy_content_runs_only_when_resolved() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let content = ItemContent::lazy(move || {
            counter.set(counter.get() + 1);
            "details".to_string()
        });
        let item = HoverItem::new("A", "a").with_content(content);
        let _cells = card_cells(std::slice::from_ref(&item), None, None, InstanceId::next());
        assert_eq!(calls.get(), 0);

        let resolved = item.content.as_ref().map(ItemContent::resolve);
        assert_eq!(resolved.as_deref(), Some("details"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn cells_follow_input_order() {
        let items = items(4);
        let cells = card_cells(&items, Some(2), None, InstanceId::next());
        assert_eq!(cells.len(), 4);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index, i);
            assert_eq!(cell.title, items[i].title);
            assert_eq!(cell.highlighted, i == 2);
        }
    }

    #[test]
    fn empty_image_is_omitted() {
        let item: HoverItem<String> = HoverItem::new("A", "a").with_image("");
        let model = overlay_model(&item, InstanceId::next());
        assert_eq!(model.image, None);
    }

    #[test]
    fn morph_keys_are_css_identifiers() {
        let instance = InstanceId::next();
        let key = morph_key(MorphKind::Card, "Unity / Unreal Projects", instance);
        assert!(key.starts_with("card-Unity___Unreal_Projects-g"));
        assert!(key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_ne!(key, morph_key(MorphKind::Card, "Unity / Unreal Projects", InstanceId::next()));
    }

    #[test]
    fn active_cell_hands_morph_keys_to_overlay() {
        let items = items(3);
        let instance = InstanceId::next();
        let cells = card_cells(&items, None, Some(1), instance);
        assert!(cells[0].morph.is_some());
        assert_eq!(cells[1].morph, None);

        let overlay = overlay_model(&items[1], instance);
        assert_eq!(overlay.keys, MorphKeys::for_item(&items[1], instance));
        let names: Vec<String> = cells
            .iter()
            .filter_map(|cell| cell.morph.as_ref())
            .chain(std::iter::once(&overlay.keys))
            .flat_map(|keys| [&keys.card, &keys.image, &keys.title, &keys.description])
            .cloned()
            .collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn transition_style_names_the_key() {
        let key = morph_key(MorphKind::Title, "Gamer Guide", InstanceId::next());
        assert_eq!(
            transition_style(&key),
            format!("view-transition-name: {key}")
        );
    }

    #[test]
    fn content_equality_is_identity() {
        let a: ItemContent<String> = ItemContent::value("x".into());
        let b: ItemContent<String> = ItemContent::value("x".into());
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
