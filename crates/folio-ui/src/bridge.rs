//! Page-side listeners installed through `document::eval`.
//!
//! Every script registers a remover under its key in `window.__folio`.
//! [`detach`] calls that remover, so a hook's `use_drop` tears its listener
//! down no matter how the component went away. Scripts that need an element
//! retry on animation frames until it is attached.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Fresh registry key for one listener.
pub(crate) fn listener_key() -> String {
    format!("l{}", NEXT_KEY.fetch_add(1, Ordering::Relaxed))
}

const PRELUDE: &str = r#"
window.__folio = window.__folio || {};
let cancelled = false;
let cleanup = () => {};
window.__folio[__KEY__] = () => {
  cancelled = true;
  cleanup();
  delete window.__folio[__KEY__];
};
"#;

const OUTSIDE_CLICK: &str = r#"
const handler = (event) => {
  const region = document.getElementById(__TARGET__);
  if (region && !region.contains(event.target)) {
    dioxus.send(true);
  }
};
document.addEventListener("mousedown", handler);
document.addEventListener("touchstart", handler);
cleanup = () => {
  document.removeEventListener("mousedown", handler);
  document.removeEventListener("touchstart", handler);
};
"#;

const KEYDOWN: &str = r#"
const handler = (event) => {
  if (event.key === __TARGET__) {
    dioxus.send(event.key);
  }
};
window.addEventListener("keydown", handler);
cleanup = () => window.removeEventListener("keydown", handler);
"#;

const ELEMENT_HEIGHT: &str = r#"
const attach = () => {
  if (cancelled) return;
  const el = document.getElementById(__TARGET__);
  if (!el) {
    requestAnimationFrame(attach);
    return;
  }
  const report = () => dioxus.send(el.offsetHeight || 0);
  const observer = new ResizeObserver(report);
  observer.observe(el);
  report();
  cleanup = () => observer.disconnect();
};
attach();
"#;

const SCROLL_PROGRESS: &str = r#"
const attach = () => {
  if (cancelled) return;
  const el = document.getElementById(__TARGET__);
  if (!el) {
    requestAnimationFrame(attach);
    return;
  }
  let frame = 0;
  const report = () => {
    frame = 0;
    const rect = el.getBoundingClientRect();
    dioxus.send({ top: rect.top, height: rect.height, viewport: window.innerHeight });
  };
  const schedule = () => {
    if (!frame) frame = requestAnimationFrame(report);
  };
  window.addEventListener("scroll", schedule, { passive: true, capture: true });
  window.addEventListener("resize", schedule);
  const observer = new ResizeObserver(schedule);
  observer.observe(el);
  report();
  cleanup = () => {
    cancelAnimationFrame(frame);
    window.removeEventListener("scroll", schedule, { capture: true });
    window.removeEventListener("resize", schedule);
    observer.disconnect();
  };
};
attach();
"#;

/// Listener kinds the bridge knows how to install.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Listener {
    /// Pointer-down outside the element with the target id.
    OutsideClick,
    /// Window keydown for the target key name.
    Keydown,
    /// `offsetHeight` of the target element on every resize.
    ElementHeight,
    /// Bounding box of the target element on scroll and resize.
    ScrollProgress,
}

impl Listener {
    fn body(&self) -> &'static str {
        match self {
            Listener::OutsideClick => OUTSIDE_CLICK,
            Listener::Keydown => KEYDOWN,
            Listener::ElementHeight => ELEMENT_HEIGHT,
            Listener::ScrollProgress => SCROLL_PROGRESS,
        }
    }

    /// Full script for `key` watching `target`.
    pub(crate) fn script(&self, key: &str, target: &str) -> String {
        let mut script = String::with_capacity(PRELUDE.len() + self.body().len());
        script.push_str(&PRELUDE.replace("__KEY__", &js_string(key)));
        script.push_str(&self.body().replace("__TARGET__", &js_string(target)));
        script
    }
}

/// `value` as a quoted JS string literal. JSON strings are valid JS literals.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Start `listener` and return the eval channel its events arrive on.
pub(crate) fn attach(listener: Listener, key: &str, target: &str) -> document::Eval {
    tracing::trace!(?listener, key, target, "attaching page listener");
    document::eval(&listener.script(key, target))
}

/// Remove the listener registered under `key`. Unknown keys are ignored.
pub(crate) fn detach(key: &str) {
    tracing::trace!(key, "detaching page listener");
    let script = format!(
        r#"const remove = window.__folio && window.__folio[{}]; if (remove) remove();"#,
        js_string(key)
    );
    let _ = document::eval(&script);
}

/// Toggle page scrolling on the document body.
pub(crate) fn set_body_scroll_locked(locked: bool) {
    let script = if locked {
        r#"document.body.style.overflow = "hidden";"#
    } else {
        r#"document.body.style.overflow = "";"#
    };
    let _ = document::eval(script);
}
