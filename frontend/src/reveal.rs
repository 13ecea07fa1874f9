//! Scroll-reveal animation.
//!
//! Elements carrying `scroll-reveal` get the `revealed` class once a tenth of
//! them is inside the viewport. A `RevealScope` is acquired by a view after it
//! renders and disconnects its observer when dropped.

use gloo_console::error;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_SELECTOR: &str = ".scroll-reveal";
pub const REVEALED_CLASS: &str = "revealed";
const VISIBLE_THRESHOLD: f64 = 0.1;

pub struct RevealScope {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealScope {
    /// Observes every element currently matching `.scroll-reveal`.
    ///
    /// Returns `None` when the browser lacks the APIs involved; the content then
    /// simply stays unanimated.
    pub fn observe() -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1(REVEALED_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                error!(format!("IntersectionObserver unavailable: {:?}", e));
                return None;
            }
        };

        let document = web_sys::window()?.document()?;
        let nodes = document.query_selector_all(REVEAL_SELECTOR).ok()?;
        for index in 0..nodes.length() {
            if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                if !element.class_list().contains(REVEALED_CLASS) {
                    observer.observe(&element);
                }
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealScope {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
