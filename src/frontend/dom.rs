use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::error::{SiteError, SiteResult};

pub fn document() -> SiteResult<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or(SiteError::MissingDocument)
}

pub fn document_hidden() -> bool {
    document().map(|d| d.hidden()).unwrap_or(false)
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("bad selector `{selector}`");
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Inline style write. Non-HTML elements (SVG and friends) are left alone.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Runs `f` once the document is parsed, immediately if that already happened.
pub fn on_dom_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "loading" {
        EventListener::once(document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

/// Runs `f` after the window `load` event. The wasm module usually finishes
/// fetching after `load` has fired, so a complete document runs `f` right away.
pub fn on_window_load<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(win) = window() else {
        return;
    };

    let complete = win
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);

    if complete {
        f();
    } else {
        EventListener::once(&win, "load", move |_| f()).forget();
    }
}
