use dioxus::prelude::*;
use folio_core::{scroll_progress, ElementBox};
use serde::Deserialize;

use crate::bridge::{self, Listener};

/// Box report sent by the page on scroll and resize.
#[derive(Clone, Copy, Debug, Deserialize)]
struct ViewportReport {
    top: f64,
    height: f64,
    viewport: f64,
}

impl ViewportReport {
    fn progress(&self) -> f64 {
        scroll_progress(
            ElementBox {
                top: self.top,
                height: self.height,
            },
            self.viewport,
        )
    }
}

/// Scroll progress through the element with id `target_id`: 0 when its top
/// reaches the viewport top, 1 when its bottom reaches the viewport bottom.
pub fn use_scroll_progress(target_id: &str) -> Signal<f64> {
    let mut progress = use_signal(|| 0.0);
    let key = use_hook(bridge::listener_key);

    let target = target_id.to_string();
    let listener_key = key.clone();
    use_future(move || {
        let target = target.clone();
        let key = listener_key.clone();
        async move {
            let mut events = bridge::attach(Listener::ScrollProgress, &key, &target);
            loop {
                match events.recv::<ViewportReport>().await {
                    Ok(report) => {
                        let next = report.progress();
                        if *progress.peek() != next {
                            progress.set(next);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("scroll progress listener closed: {:?}", e);
                        break;
                    }
                }
            }
        }
    });

    use_drop(move || bridge::detach(&key));

    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_maps_to_progress() {
        let report = ViewportReport {
            top: -250.0,
            height: 1500.0,
            viewport: 1000.0,
        };
        assert!((report.progress() - 0.5).abs() < 1e-9);
    }
}
