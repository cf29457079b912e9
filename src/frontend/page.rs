use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{window, Document, Element};

use super::dom::{self, set_style};
use super::Wiring;
use crate::error::SiteResult;
use crate::preloader::{LoadProgress, FADE_MS, HIDE_DELAY_MS, STEP_MS};

fn advance_loader(mut progress: LoadProgress, bar: Option<Element>) {
    progress.advance(fastrand::f64());
    if let Some(bar) = &bar {
        set_style(bar, "width", &progress.width());
    }

    if !progress.is_complete() {
        Timeout::new(STEP_MS, move || advance_loader(progress, bar)).forget();
    }
}

pub fn install_preloader(wiring: &mut Wiring) -> SiteResult<()> {
    let Some(preloader) = wiring.document.get_element_by_id("preloader") else {
        log::debug!("no #preloader overlay");
        return Ok(());
    };

    let body = wiring.document.body();
    if let Some(body) = &body {
        set_style(body, "overflow", "hidden");
    }

    let bar = wiring.document.query_selector(".loading-progress")?;
    advance_loader(LoadProgress::default(), bar);

    dom::on_window_load(move || {
        Timeout::new(HIDE_DELAY_MS, move || {
            set_style(&preloader, "opacity", "0");
            Timeout::new(FADE_MS, move || {
                set_style(&preloader, "display", "none");
                if let Some(body) = &body {
                    set_style(body, "overflow", "visible");
                }
            })
            .forget();
        })
        .forget();
    });

    Ok(())
}

pub fn install_visibility(wiring: &mut Wiring) -> SiteResult<()> {
    let document = wiring.document.clone();
    wiring.listen(EventListener::new(&wiring.document, "visibilitychange", move |_| {
        let play_state = if document.hidden() { "paused" } else { "running" };
        for element in dom::query_all(&document, ".floating-element, .star") {
            set_style(&element, "animation-play-state", play_state);
        }
    }));

    Ok(())
}

fn shorten_animations(document: &Document) {
    for element in dom::query_all(document, "*") {
        set_style(&element, "animation-duration", "0.01ms");
        set_style(&element, "transition-duration", "0.01ms");
    }
    log::debug!("reduced motion requested; animations shortened");
}

pub fn apply_reduced_motion(wiring: &mut Wiring) -> SiteResult<()> {
    if !dom::prefers_reduced_motion() {
        return Ok(());
    }

    // Yew islands render from a microtask; a zero-delay task runs after them.
    let document = wiring.document.clone();
    Timeout::new(0, move || shorten_animations(&document)).forget();
    Ok(())
}

fn report_load_time() {
    let Some(timing) = window().and_then(|w| w.performance()).map(|p| p.timing()) else {
        return;
    };

    let end = timing.load_event_end();
    if end <= 0.0 {
        return;
    }
    log::info!("✓ page loaded in {}ms", end - timing.navigation_start());
}

pub fn install_load_report(_wiring: &mut Wiring) -> SiteResult<()> {
    // `loadEventEnd` is only filled in after the load handlers return.
    dom::on_window_load(|| Timeout::new(0, report_load_time).forget());
    Ok(())
}

pub fn install_teardown(wiring: &mut Wiring) -> SiteResult<()> {
    let teardown = wiring.teardown.clone();
    wiring.listen(EventListener::new(&wiring.window, "beforeunload", move |_| {
        teardown.borrow_mut().release();
    }));
    Ok(())
}
