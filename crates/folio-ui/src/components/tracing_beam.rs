//! Tracing Beam
//!
//! Wraps a content block with a vertical guide path. A gradient travels
//! down the path as the reader scrolls through the content; its three stops
//! follow scroll progress through spring filters so the beam eases instead
//! of snapping.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{BeamPipeline, InstanceId, SpringConfig};
use tokio::sync::Notify;
use tokio::time::Instant;

use crate::hooks::{use_element_height, use_scroll_progress};

/// Animation frame interval.
const FRAME: Duration = Duration::from_millis(16);

/// Longest step fed to the springs; longer gaps (a suspended window) are cut.
const MAX_STEP: Duration = Duration::from_millis(100);

const BEAM_COLOR: &str = "#18CCFC";
const BEAM_TAIL_COLOR: &str = "#6344F5";
const RAIL_COLOR: &str = "#9091A0";

/// Frame loop that sleeps until woken, then calls `advance` with the
/// elapsed time once per frame until it returns `false`.
async fn drive_frames(wake: Rc<Notify>, mut advance: impl FnMut(Duration) -> bool) {
    loop {
        wake.notified().await;
        let mut last = Instant::now();
        loop {
            tokio::time::sleep(FRAME).await;
            let now = Instant::now();
            let elapsed = now.duration_since(last).min(MAX_STEP);
            last = now;
            if !advance(elapsed) {
                break;
            }
        }
    }
}

#[component]
pub fn TracingBeam(
    /// Content tracked by the beam, rendered unmodified
    children: Element,
    #[props(default)]
    class: Option<String>,
) -> Element {
    let instance = use_hook(InstanceId::next);
    let container_id = format!("beam-{instance}");
    let content_id = format!("beam-content-{instance}");
    let gradient_id = format!("beam-gradient-{instance}");

    let motion = use_hook(|| try_consume_context::<SpringConfig>().unwrap_or_default());
    let mut beam = use_signal(move || BeamPipeline::new(motion));
    let progress = use_scroll_progress(&container_id);
    let height = use_element_height(&content_id);

    let wake = use_hook(|| Rc::new(Notify::new()));

    // Retarget the springs whenever raw progress moves
    use_effect({
        let wake = Rc::clone(&wake);
        move || {
            let p = progress();
            beam.write().set_progress(p);
            if !beam.peek().is_settled() {
                wake.notify_one();
            }
        }
    });

    // Integrate springs until they rest, then park until the next move
    use_future(move || {
        drive_frames(Rc::clone(&wake), move |elapsed| {
            beam.write().tick(elapsed);
            !beam.peek().is_settled()
        })
    });

    let geometry = height.read().geometry();
    let stops = beam.read().stops();
    let path = geometry.path();
    let view_box = geometry.view_box();
    let svg_height = geometry.height();
    let y2 = geometry.gradient_y2();
    let beam_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("tracing-beam {extra}"),
        _ => "tracing-beam".to_string(),
    };

    rsx! {
        div { id: "{container_id}", class: "{beam_class}",
            div { class: "tracing-beam__rail",
                svg {
                    view_box: "{view_box}",
                    width: "20",
                    height: "{svg_height}",
                    class: "tracing-beam__svg",
                    "aria-hidden": "true",

                    path {
                        d: "{path}",
                        fill: "none",
                        stroke: RAIL_COLOR,
                        "stroke-opacity": "0.16",
                    }
                    path {
                        d: "{path}",
                        fill: "none",
                        stroke: "url(#{gradient_id})",
                        stroke_width: "1.25",
                    }
                    defs {
                        linearGradient {
                            id: "{gradient_id}",
                            "gradientUnits": "userSpaceOnUse",
                            "x1": "0",
                            "x2": "0",
                            "y1": "0",
                            "y2": "{y2}",
                            stop {
                                "stop-color": BEAM_COLOR,
                                "stop-opacity": "0",
                                "offset": "{stops.start}",
                            }
                            stop {
                                "stop-color": BEAM_COLOR,
                                "offset": "{stops.mid}",
                            }
                            stop {
                                "stop-color": BEAM_TAIL_COLOR,
                                "stop-opacity": "0",
                                "offset": "{stops.end}",
                            }
                        }
                    }
                }
            }

            div { id: "{content_id}", class: "tracing-beam__content", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn frames_stop_at_rest_and_resume_on_wake() {
        let wake = Rc::new(Notify::new());
        let calls = Rc::new(Cell::new(0u32));
        let local = tokio::task::LocalSet::new();

        local
            .run_until(async {
                let counter = Rc::clone(&calls);
                let frames = tokio::task::spawn_local(drive_frames(Rc::clone(&wake), move |elapsed| {
                    assert!(elapsed <= MAX_STEP);
                    counter.set(counter.get() + 1);
                    counter.get() % 3 != 0
                }));

                tokio::time::sleep(Duration::from_secs(1)).await;
                assert_eq!(calls.get(), 0, "no frames before the first wake");

                wake.notify_one();
                tokio::time::sleep(Duration::from_secs(1)).await;
                assert_eq!(calls.get(), 3);

                tokio::time::sleep(Duration::from_secs(10)).await;
                assert_eq!(calls.get(), 3, "parked while at rest");

                wake.notify_one();
                tokio::time::sleep(Duration::from_secs(1)).await;
                assert_eq!(calls.get(), 6);

                frames.abort();
            })
            .await;
    }
}
