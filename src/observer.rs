//! Glue over the browser `IntersectionObserver`. The page only needs one
//! capability from it: "tell me a card's sequence position once enough of
//! it is on screen". Cards advertise their position through a
//! `data-index` attribute; entries missing it are ignored.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    // Keeps the JS callback alive for as long as the observer is.
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl IntersectionWatcher {
    /// Returns `None` when the observer cannot be constructed; callers
    /// degrade to leaving their elements unrevealed rather than failing.
    pub fn new(threshold: f64, root_margin: &str, on_enter: Rc<dyn Fn(usize)>) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let index = entry
                    .target()
                    .get_attribute("data-index")
                    .and_then(|raw| raw.parse::<usize>().ok());
                if let Some(index) = index {
                    on_enter(index);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
