use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::window;

use super::dom::{self, set_style};
use super::Wiring;
use crate::error::{SiteError, SiteResult};
use crate::notify::{
    duration_or, ToastSchedule, COPIED_MESSAGE, HIDDEN_TRANSFORM, OFFLINE_MESSAGE, ONLINE_MESSAGE,
    SHOWN_TRANSFORM, TOAST_STYLE,
};
use crate::VERSION;

fn attach_toast(message: &str, duration_ms: u32) -> SiteResult<()> {
    let document = dom::document()?;
    let body = document.body().ok_or(SiteError::MissingDocument)?;

    let toast = document.create_element("div")?;
    toast.set_attribute("style", TOAST_STYLE)?;
    toast.set_attribute("role", "status")?;
    toast.set_text_content(Some(message));
    body.append_child(&toast)?;

    let schedule = ToastSchedule::new(duration_ms);
    {
        let toast = toast.clone();
        Timeout::new(schedule.enter_at, move || set_style(&toast, "transform", SHOWN_TRANSFORM)).forget();
    }
    {
        let toast = toast.clone();
        Timeout::new(schedule.leave_at, move || set_style(&toast, "transform", HIDDEN_TRANSFORM)).forget();
    }
    // No-op if something else already detached it.
    Timeout::new(schedule.remove_at, move || toast.remove()).forget();

    Ok(())
}

pub fn show_notification(message: &str, duration_ms: u32) {
    if let Err(err) = attach_toast(message, duration_ms) {
        log::warn!("notification dropped: {err}");
    }
}

/// Writes through the async Clipboard API. `Ok(false)` when the browser has none.
async fn write_clipboard(text: &str) -> SiteResult<bool> {
    let navigator = window().ok_or(SiteError::MissingDocument)?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Ok(false);
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into::<Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(true)
}

pub fn install_clipboard(wiring: &mut Wiring) -> SiteResult<()> {
    let duration_ms = wiring.config.notification_ms;

    for element in dom::query_all(&wiring.document, ".contact-value, .footer-contact li span:last-child") {
        set_style(&element, "cursor", "pointer");
        let _ = element.set_attribute("title", "Click to copy");

        let source = element.clone();
        wiring.listen(EventListener::new(&element, "click", move |_| {
            let text = source.text_content().unwrap_or_default().trim().to_string();
            if text.is_empty() {
                return;
            }

            spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(true) => show_notification(COPIED_MESSAGE, duration_ms),
                    Ok(false) => log::debug!("clipboard API unavailable"),
                    Err(err) => log::error!("copy failed: {err}"),
                }
            });
        }));
    }

    Ok(())
}

pub fn install_network_status(wiring: &mut Wiring) -> SiteResult<()> {
    let duration_ms = wiring.config.notification_ms;

    wiring.listen(EventListener::new(&wiring.window, "online", move |_| {
        show_notification(ONLINE_MESSAGE, duration_ms);
    }));
    wiring.listen(EventListener::new(&wiring.window, "offline", move |_| {
        show_notification(OFFLINE_MESSAGE, duration_ms);
    }));

    Ok(())
}

/// Publishes `{ showNotification, version }` on `window` for inline scripts.
pub fn export_global(wiring: &mut Wiring) -> SiteResult<()> {
    let default_ms = wiring.config.notification_ms;
    let show = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, duration: JsValue| {
        let message = message
            .as_string()
            .unwrap_or_else(|| format!("{message:?}"));
        show_notification(&message, duration_or(duration.as_f64(), default_ms));
    });

    let api = Object::new();
    Reflect::set(&api, &JsValue::from_str("showNotification"), show.as_ref())?;
    Reflect::set(&api, &JsValue::from_str("version"), &JsValue::from_str(VERSION))?;
    Reflect::set(&wiring.window, &JsValue::from_str(&wiring.config.global_name), &api)?;

    // Callable for as long as the page lives.
    show.forget();
    Ok(())
}

pub fn schedule_welcome(wiring: &mut Wiring) -> SiteResult<()> {
    let config = wiring.config.clone();
    Timeout::new(config.welcome_delay_ms, move || {
        show_notification(&config.welcome_message, config.welcome_duration_ms);
    })
    .forget();

    log::info!("🎭 {} loaded", wiring.config.event_name);
    Ok(())
}
