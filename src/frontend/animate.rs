use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element};

use super::dom::{self, set_style};
use super::observe::{ObserveOptions, OnceObserver};
use super::Wiring;
use crate::error::SiteResult;
use crate::filter::{self, CardAction, FADE_IN_DELAY_MS, HIDE_DELAY_MS};
use crate::stats::{group_thousands, parse_count, CountUp};

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(callback: &FrameCallback) {
    if let Some(win) = window() {
        let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Counts `element`'s text up to `target`, one step per animation frame.
fn animate_count(element: Element, target: i64) {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let mut count: Option<CountUp> = None;

    *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
        let sample = count
            .get_or_insert_with(|| CountUp::new(target, now))
            .sample(now);
        element.set_text_content(Some(&group_thousands(sample.value)));

        if sample.done {
            // Last frame: release the closure.
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            request_frame(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(callback);
    }
}

pub fn install_stats(wiring: &mut Wiring) -> SiteResult<()> {
    let boxes = dom::query_all(&wiring.document, ".stat-box");
    let positions = boxes.clone();
    let state = wiring.state.clone();

    let options = ObserveOptions {
        threshold: Some(0.3),
        root_margin: None,
    };
    let observer = OnceObserver::observe(&boxes, options, move |stat_box| {
        let Some(number) = stat_box.query_selector(".stat-number").ok().flatten() else {
            return true;
        };
        let Some(target) = number.get_attribute("data-count").as_deref().and_then(parse_count) else {
            log::debug!("stat box without a numeric data-count");
            return true;
        };
        let Some(position) = positions.iter().position(|el| el == stat_box) else {
            return true;
        };

        if state.borrow_mut().animated_stats.claim(position) {
            animate_count(number, target);
        }
        true
    })?;

    if let Some(observer) = observer {
        wiring.teardown.borrow_mut().observers.push(observer);
    }
    Ok(())
}

pub fn install_reveal(wiring: &mut Wiring) -> SiteResult<()> {
    let elements = dom::query_all(&wiring.document, "[data-aos]");
    for element in &elements {
        set_style(element, "opacity", "0");
        set_style(element, "transform", "translateY(30px)");
        set_style(element, "transition", "opacity 0.6s ease, transform 0.6s ease");
    }

    let options = ObserveOptions {
        threshold: Some(0.1),
        root_margin: Some("-50px"),
    };
    let observer = OnceObserver::observe(&elements, options, |element| {
        set_style(element, "opacity", "1");
        set_style(element, "transform", "translateY(0)");
        true
    })?;

    if let Some(observer) = observer {
        wiring.teardown.borrow_mut().observers.push(observer);
    }
    Ok(())
}

pub fn install_lazy_images(wiring: &mut Wiring) -> SiteResult<()> {
    let images = dom::query_all(&wiring.document, "img[data-src]");

    let options = ObserveOptions {
        threshold: None,
        root_margin: Some("100px"),
    };
    let observer = OnceObserver::observe(&images, options, |image| {
        let Some(src) = image.get_attribute("data-src").filter(|src| !src.is_empty()) else {
            return false;
        };
        let _ = image.set_attribute("src", &src);
        let _ = image.remove_attribute("data-src");
        true
    })?;

    if let Some(observer) = observer {
        wiring.teardown.borrow_mut().observers.push(observer);
    }
    Ok(())
}

fn select_category(buttons: &[Element], cards: &[Element], active: &Element) {
    for button in buttons {
        let _ = button.class_list().remove_1("active");
    }
    let _ = active.class_list().add_1("active");

    let selected = active.get_attribute("data-category").unwrap_or_default();
    let categories: Vec<Option<String>> = cards
        .iter()
        .map(|card| card.get_attribute("data-category"))
        .collect();
    let actions = filter::plan(&selected, categories.iter().map(Option::as_deref));

    for (card, action) in cards.iter().zip(actions) {
        let card = card.clone();
        match action {
            CardAction::Show { delay_ms } => {
                Timeout::new(delay_ms, move || {
                    set_style(&card, "display", "block");
                    Timeout::new(FADE_IN_DELAY_MS, move || {
                        set_style(&card, "opacity", "1");
                        set_style(&card, "transform", "translateY(0)");
                    })
                    .forget();
                })
                .forget();
            }
            CardAction::Hide => {
                set_style(&card, "opacity", "0");
                set_style(&card, "transform", "translateY(20px)");
                Timeout::new(HIDE_DELAY_MS, move || set_style(&card, "display", "none")).forget();
            }
        }
    }
}

pub fn install_tabs(wiring: &mut Wiring) -> SiteResult<()> {
    let buttons = Rc::new(dom::query_all(&wiring.document, ".tab-btn"));
    let cards = Rc::new(dom::query_all(&wiring.document, ".event-card[data-category]"));

    for button in buttons.iter() {
        let all_buttons = buttons.clone();
        let cards = cards.clone();
        let active = button.clone();
        wiring.listen(EventListener::new(button, "click", move |_| {
            select_category(&all_buttons, &cards, &active);
        }));
    }

    Ok(())
}
