use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use yew::prelude::*;

use super::dom;
use super::Wiring;
use crate::countdown::{should_tick, CountdownFrame, TICK_MS};
use crate::error::{SiteError, SiteResult};

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

fn parse_target(raw: &str) -> SiteResult<i64> {
    let millis = js_sys::Date::parse(raw);
    if millis.is_nan() {
        return Err(SiteError::InvalidDate(raw.to_string()));
    }
    Ok(millis as i64)
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub target_ms: i64,
    pub started_message: AttrValue,
}

#[function_component(CountdownView)]
pub fn countdown_view(props: &CountdownProps) -> Html {
    let target_ms = props.target_ms;
    let frame = use_state_eq(move || CountdownFrame::at(target_ms, now_ms()));
    let page_hidden = use_state_eq(dom::document_hidden);

    {
        let page_hidden = page_hidden.clone();
        use_effect_with((), move |_| {
            let listener = dom::document().ok().map(|document| {
                EventListener::new(&document, "visibilitychange", move |_| {
                    page_hidden.set(dom::document_hidden());
                })
            });
            move || drop(listener)
        });
    }

    {
        // Resuming recomputes once right away, then every second.
        let ticking = should_tick(*page_hidden, &frame);
        let frame = frame.clone();
        use_effect_with(ticking, move |ticking| {
            let interval = ticking.then(|| {
                frame.set(CountdownFrame::at(target_ms, now_ms()));
                Interval::new(TICK_MS, move || {
                    frame.set(CountdownFrame::at(target_ms, now_ms()));
                })
            });
            move || drop(interval)
        });
    }

    match *frame {
        CountdownFrame::Started => html! {
            <span class="countdown-started" style="color: #d4af37;">{props.started_message.clone()}</span>
        },
        CountdownFrame::Running(remaining) => html! {
            <>
                { for remaining.fields().into_iter().map(|(value, label)| html! {
                    <div class="countdown-item" key={label}>
                        <span class="countdown-value">{value}</span>
                        <span class="countdown-label">{label}</span>
                    </div>
                }) }
            </>
        },
    }
}

pub fn mount(wiring: &mut Wiring) -> SiteResult<()> {
    let Some(root) = wiring.document.get_element_by_id("countdown") else {
        log::debug!("no #countdown region");
        return Ok(());
    };

    let props = CountdownProps {
        target_ms: parse_target(&wiring.config.countdown_target)?,
        started_message: AttrValue::from(wiring.config.started_message.clone()),
    };

    root.set_inner_html("");
    let app = yew::Renderer::<CountdownView>::with_root_and_props(root, props).render();
    wiring.teardown.borrow_mut().countdown = Some(app);
    Ok(())
}
