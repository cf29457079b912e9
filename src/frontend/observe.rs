use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteResult;

#[derive(Clone, Copy, Default)]
pub struct ObserveOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<&'static str>,
}

/// Watches targets until each one first becomes visible.
///
/// The action returns whether it consumed the element; consumed elements are
/// unobserved, so the action runs at most once per element. Dropping the
/// handle disconnects the observer.
pub struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OnceObserver {
    pub fn observe<F>(targets: &[Element], options: ObserveOptions, mut action: F) -> SiteResult<Option<Self>>
    where
        F: FnMut(&Element) -> bool + 'static,
    {
        if targets.is_empty() {
            return Ok(None);
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }

                    let target = entry.target();
                    if action(&target) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
