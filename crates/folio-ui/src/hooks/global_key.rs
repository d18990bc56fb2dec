use dioxus::prelude::*;

use crate::bridge::{self, Listener};

/// Window-level keydown listener for one key name (`"Escape"`, `"Enter"`, ...).
///
/// Attached while the calling component is mounted, removed on drop.
pub fn use_global_keydown(key_name: &'static str, on_key: impl FnMut() + 'static) {
    let mut on_key = on_key;
    let on_key = use_callback(move |_: ()| on_key());
    let key = use_hook(bridge::listener_key);

    let listener_key = key.clone();
    use_future(move || {
        let key = listener_key.clone();
        async move {
            let mut events = bridge::attach(Listener::Keydown, &key, key_name);
            while events.recv::<String>().await.is_ok() {
                on_key.call(());
            }
        }
    });

    use_drop(move || bridge::detach(&key));
}
