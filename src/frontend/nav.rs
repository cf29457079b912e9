use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::request_animation_frame;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, KeyboardEvent, Node};

use super::dom::{self, set_class, set_style};
use super::{SiteState, Wiring};
use crate::error::SiteResult;
use crate::menu::{BodyScroll, MenuEvent, MenuTransition, RESIZE_DEBOUNCE_MS};
use crate::scroll::{anchor_scroll_top, anchor_selector, ScrollEffects};

struct ScrollTargets {
    navbar: Option<Element>,
    progress: Option<Element>,
    scroll_top: Option<Element>,
}

impl ScrollTargets {
    fn render(&self, effects: &ScrollEffects) {
        if let Some(navbar) = &self.navbar {
            set_class(navbar, "scrolled", effects.navbar_scrolled);
        }
        if let Some(progress) = &self.progress {
            set_style(progress, "width", &effects.progress_width());
        }
        if let Some(button) = &self.scroll_top {
            set_class(button, "visible", effects.show_scroll_top);
        }
    }
}

fn read_scroll_effects() -> Option<ScrollEffects> {
    let win = window()?;
    let root = win.document()?.document_element()?;
    let scroll_y = win.scroll_y().unwrap_or(0.0);

    Some(ScrollEffects::compute(
        scroll_y,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    ))
}

pub fn install_scroll(wiring: &mut Wiring) -> SiteResult<()> {
    let targets = Rc::new(ScrollTargets {
        navbar: wiring.document.get_element_by_id("navbar"),
        progress: wiring.document.get_element_by_id("readingProgress"),
        scroll_top: wiring.document.get_element_by_id("scrollTop"),
    });

    if let Some(button) = targets.scroll_top.clone() {
        wiring.listen(EventListener::new(&button, "click", |_| {
            dom::smooth_scroll_to(0.0);
        }));
    }

    let state = wiring.state.clone();
    wiring.listen(EventListener::new(&wiring.window, "scroll", move |_| {
        let mut site = state.borrow_mut();
        if !site.scroll_gate.request() {
            return;
        }

        let frame_state = state.clone();
        let targets = targets.clone();
        site.scroll_frame = Some(request_animation_frame(move |_| {
            frame_state.borrow_mut().scroll_gate.complete();
            if let Some(effects) = read_scroll_effects() {
                targets.render(&effects);
            }
        }));
    }));

    Ok(())
}

struct MenuView {
    hamburger: Element,
    nav_menu: Element,
    body: Option<HtmlElement>,
}

impl MenuView {
    fn find(document: &Document) -> Option<Rc<Self>> {
        Some(Rc::new(Self {
            hamburger: document.get_element_by_id("hamburger")?,
            nav_menu: document.get_element_by_id("navMenu")?,
            body: document.body(),
        }))
    }

    fn contains(&self, node: &Node) -> bool {
        self.nav_menu.contains(Some(node)) || self.hamburger.contains(Some(node))
    }

    fn render(&self, transition: MenuTransition) {
        let open = transition.state.is_open();
        set_class(&self.hamburger, "active", open);
        set_class(&self.nav_menu, "active", open);

        let overflow = match transition.body {
            BodyScroll::Locked => "hidden",
            BodyScroll::Unlocked => "visible",
            BodyScroll::Unchanged => return,
        };
        if let Some(body) = &self.body {
            set_style(body, "overflow", overflow);
        }
    }
}

fn dispatch(state: &RefCell<SiteState>, view: &MenuView, event: MenuEvent) {
    let transition = state
        .borrow_mut()
        .menu
        .handle(event, dom::viewport_width());
    if let Some(transition) = transition {
        view.render(transition);
    }
}

pub fn install_menu(wiring: &mut Wiring) -> SiteResult<()> {
    let Some(view) = MenuView::find(&wiring.document) else {
        log::debug!("no #hamburger/#navMenu; menu controller idle");
        return Ok(());
    };

    {
        let state = wiring.state.clone();
        let menu = view.clone();
        wiring.listen(EventListener::new(&view.hamburger, "click", move |_| {
            dispatch(&state, &menu, MenuEvent::HamburgerClick);
        }));
    }

    for link in dom::query_all(&wiring.document, ".nav-menu a") {
        let state = wiring.state.clone();
        let menu = view.clone();
        wiring.listen(EventListener::new(&link, "click", move |_| {
            dispatch(&state, &menu, MenuEvent::LinkClick);
        }));
    }

    {
        let state = wiring.state.clone();
        let menu = view.clone();
        wiring.listen(EventListener::new(&wiring.document, "click", move |event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|node| menu.contains(&node));
            if !inside {
                dispatch(&state, &menu, MenuEvent::OutsideClick);
            }
        }));
    }

    let state = wiring.state.clone();
    wiring.listen(EventListener::new(&wiring.window, "resize", move |_| {
        let timer_state = state.clone();
        let menu = view.clone();
        let timer = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            dispatch(&timer_state, &menu, MenuEvent::Resize);
        });
        // Replacing the pending timer cancels it.
        state.borrow_mut().resize_timer = Some(timer);
    }));

    Ok(())
}

pub fn install_anchors(wiring: &mut Wiring) -> SiteResult<()> {
    for anchor in dom::query_all(&wiring.document, "a[href^=\"#\"]") {
        let link = anchor.clone();
        let document = wiring.document.clone();
        let listener = EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(selector) = anchor_selector(&href) else {
                    return;
                };
                event.prevent_default();

                let target = document
                    .query_selector(selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if let Some(target) = target {
                    dom::smooth_scroll_to(anchor_scroll_top(f64::from(target.offset_top())));
                }
            },
        );
        wiring.listen(listener);
    }

    Ok(())
}

pub fn install_keyboard(wiring: &mut Wiring) -> SiteResult<()> {
    let state = wiring.state.clone();
    let menu = MenuView::find(&wiring.document);

    let listener = EventListener::new_with_options(
        &wiring.document,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };

            let key = event.key();
            if key == "Escape" {
                if let Some(menu) = &menu {
                    dispatch(&state, menu, MenuEvent::Escape);
                }
            }

            if (event.ctrl_key() || event.meta_key()) && key == "Home" {
                event.prevent_default();
                dom::smooth_scroll_to(0.0);
            }
        },
    );
    wiring.listen(listener);

    Ok(())
}
