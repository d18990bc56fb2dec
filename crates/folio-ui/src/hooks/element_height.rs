use dioxus::prelude::*;
use folio_core::ContentHeight;

use crate::bridge::{self, Listener};

/// Live height of the element with id `element_id`.
///
/// Starts at 0 until the element is attached, then follows every box size
/// change for as long as the component is mounted.
pub fn use_element_height(element_id: &str) -> Signal<ContentHeight> {
    let mut height = use_signal(ContentHeight::default);
    let key = use_hook(bridge::listener_key);

    let element = element_id.to_string();
    let listener_key = key.clone();
    use_future(move || {
        let element = element.clone();
        let key = listener_key.clone();
        async move {
            let mut events = bridge::attach(Listener::ElementHeight, &key, &element);
            while let Ok(measured) = events.recv::<f64>().await {
                let mut next = *height.peek();
                if next.observe(measured) {
                    height.set(next);
                }
            }
        }
    });

    use_drop(move || bridge::detach(&key));

    height
}
