pub const ENTER_DELAY_MS: u32 = 10;
pub const SLIDE_MS: u32 = 300;

pub const HIDDEN_TRANSFORM: &str = "translateX(500px)";
pub const SHOWN_TRANSFORM: &str = "translateX(0)";

pub const TOAST_STYLE: &str = "position: fixed; bottom: 100px; right: 40px; \
    padding: 1.2rem 2.5rem; background: rgba(26, 26, 26, 0.95); color: #d4af37; \
    border: 1px solid rgba(212, 175, 55, 0.3); box-shadow: 0 10px 40px rgba(0, 0, 0, 0.5); \
    z-index: 10000; font-weight: 600; font-size: 0.95rem; font-family: 'Montserrat', sans-serif; \
    backdrop-filter: blur(10px); transform: translateX(500px); transition: transform 0.3s ease;";

pub const COPIED_MESSAGE: &str = "📋 Copied to clipboard!";
pub const ONLINE_MESSAGE: &str = "✅ Back online";
pub const OFFLINE_MESSAGE: &str = "⚠️ No internet";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Attached off-screen, waiting for the slide-in.
    Entering,
    Shown,
    Leaving,
    Removed,
}

/// Timeline of one toast, in milliseconds after it is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastSchedule {
    pub enter_at: u32,
    pub leave_at: u32,
    pub remove_at: u32,
}

impl ToastSchedule {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            enter_at: ENTER_DELAY_MS,
            leave_at: duration_ms,
            remove_at: duration_ms.saturating_add(SLIDE_MS),
        }
    }

    pub fn phase_at(&self, elapsed_ms: u32) -> ToastPhase {
        if elapsed_ms >= self.remove_at {
            ToastPhase::Removed
        } else if elapsed_ms >= self.leave_at {
            ToastPhase::Leaving
        } else if elapsed_ms >= self.enter_at {
            ToastPhase::Shown
        } else {
            ToastPhase::Entering
        }
    }
}

/// Optional duration coming from script callers; non-finite or negative
/// values fall back to `default_ms`.
pub fn duration_or(requested: Option<f64>, default_ms: u32) -> u32 {
    match requested {
        Some(ms) if ms.is_finite() && ms >= 0.0 => ms.min(f64::from(u32::MAX)) as u32,
        _ => default_ms,
    }
}
