mod animate;
mod countdown;
mod dom;
mod nav;
mod notify;
mod observe;
mod page;
mod starfield;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::AnimationFrame;
use gloo::timers::callback::Timeout;
use web_sys::{Document, Window};
use yew::AppHandle;

use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::error::{SiteError, SiteResult};
use crate::menu::MenuController;
use crate::scroll::FrameGate;
use crate::stats::AnimatedStats;
use crate::VERSION;

use self::countdown::CountdownView;
use self::observe::OnceObserver;
use self::starfield::Starfield;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Mutable state shared by the event handlers.
#[derive(Default)]
pub(crate) struct SiteState {
    pub menu: MenuController,
    pub scroll_gate: FrameGate,
    pub scroll_frame: Option<AnimationFrame>,
    pub resize_timer: Option<Timeout>,
    pub animated_stats: AnimatedStats,
}

/// Handles released on `beforeunload`.
#[derive(Default)]
pub(crate) struct Teardown {
    pub countdown: Option<AppHandle<CountdownView>>,
    pub observers: Vec<OnceObserver>,
}

impl Teardown {
    fn release(&mut self) {
        if let Some(app) = self.countdown.take() {
            app.destroy();
        }
        self.observers.clear();
    }
}

/// Startup context passed to every installer.
pub(crate) struct Wiring {
    pub window: Window,
    pub document: Document,
    pub config: Rc<SiteConfig>,
    pub state: Rc<RefCell<SiteState>>,
    pub teardown: Rc<RefCell<Teardown>>,
    pub starfield: Option<AppHandle<Starfield>>,
    listeners: Vec<EventListener>,
}

impl Wiring {
    /// Keeps `listener` registered for the lifetime of the page.
    pub fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    fn install(&mut self, feature: &str, installer: fn(&mut Wiring) -> SiteResult<()>) {
        if let Err(err) = installer(self) {
            log::warn!("{feature} disabled: {err}");
        }
    }
}

/// Everything that must outlive `run`.
struct Site {
    _listeners: Vec<EventListener>,
    _state: Rc<RefCell<SiteState>>,
    _teardown: Rc<RefCell<Teardown>>,
    _starfield: Option<AppHandle<Starfield>>,
}

fn read_config(document: &Document) -> SiteResult<SiteConfig> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&raw)
}

fn start(window: Window, document: Document, config: SiteConfig) {
    let mut wiring = Wiring {
        window,
        document,
        config: Rc::new(config),
        state: Rc::default(),
        teardown: Rc::default(),
        starfield: None,
        listeners: Vec::new(),
    };

    wiring.install("preloader", page::install_preloader);
    wiring.install("starfield", starfield::mount);
    wiring.install("scroll effects", nav::install_scroll);
    wiring.install("menu", nav::install_menu);
    wiring.install("anchor scrolling", nav::install_anchors);
    wiring.install("keyboard shortcuts", nav::install_keyboard);
    wiring.install("stat counters", animate::install_stats);
    wiring.install("reveal", animate::install_reveal);
    wiring.install("lazy images", animate::install_lazy_images);
    wiring.install("tab filter", animate::install_tabs);
    wiring.install("countdown", countdown::mount);
    wiring.install("clipboard", notify::install_clipboard);
    wiring.install("network status", notify::install_network_status);
    wiring.install("global export", notify::export_global);
    wiring.install("welcome", notify::schedule_welcome);
    wiring.install("visibility", page::install_visibility);
    wiring.install("reduced motion", page::apply_reduced_motion);
    wiring.install("load report", page::install_load_report);
    wiring.install("teardown", page::install_teardown);

    log::info!("🚀 {} v{VERSION}: all systems ready", wiring.config.event_name);

    let site = Site {
        _listeners: wiring.listeners,
        _state: wiring.state,
        _teardown: wiring.teardown,
        _starfield: wiring.starfield,
    };
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
}

pub fn run() {
    console_error_panic_hook::set_once();

    let (window, document) = match web_sys::window().and_then(|w| w.document().map(|d| (w, d))) {
        Some(pair) => pair,
        None => {
            let _ = console_log::init_with_level(log::Level::Warn);
            log::error!("{}", SiteError::MissingDocument);
            return;
        }
    };

    let (config, config_error) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    let _ = console_log::init_with_level(config.log_level.as_level());
    if let Some(err) = config_error {
        log::warn!("{err}; falling back to defaults");
    }

    let ready_document = document.clone();
    dom::on_dom_ready(&document, move || start(window, ready_document, config));
}
