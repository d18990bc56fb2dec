use dioxus::prelude::*;

use crate::bridge::{self, Listener};

/// Call `on_outside` for every pointer-down that lands outside the element
/// with id `region_id`.
///
/// Events are ignored while the region is not in the document, so a hook
/// watching an overlay that is currently unmounted stays silent.
pub fn use_outside_click(region_id: &str, on_outside: impl FnMut() + 'static) {
    let mut on_outside = on_outside;
    let on_outside = use_callback(move |_: ()| on_outside());
    let key = use_hook(bridge::listener_key);

    let region = region_id.to_string();
    let listener_key = key.clone();
    use_future(move || {
        let region = region.clone();
        let key = listener_key.clone();
        async move {
            let mut events = bridge::attach(Listener::OutsideClick, &key, &region);
            while events.recv::<bool>().await.is_ok() {
                on_outside.call(());
            }
        }
    });

    use_drop(move || bridge::detach(&key));
}
