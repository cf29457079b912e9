pub const STEP_MS: u32 = 100;
pub const HIDE_DELAY_MS: u32 = 1000;
pub const FADE_MS: u32 = 500;

const MIN_STEP: f64 = 15.0;
const STEP_SPREAD: f64 = 30.0;

/// Simulated load progress in percent. Each step adds 15..45.
#[derive(Debug, Default)]
pub struct LoadProgress {
    percent: f64,
}

impl LoadProgress {
    /// `roll` is a uniform sample in `[0, 1)`.
    pub fn advance(&mut self, roll: f64) -> f64 {
        self.percent = (self.percent + roll * STEP_SPREAD + MIN_STEP).min(100.0);
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }

    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_within_seven_steps() {
        let mut progress = LoadProgress::default();
        let mut steps = 0;
        while !progress.is_complete() {
            progress.advance(0.0);
            steps += 1;
        }
        assert_eq!(steps, 7);
        assert_eq!(progress.width(), "100%");
    }

    #[test]
    fn never_overshoots() {
        let mut progress = LoadProgress::default();
        let mut last = 0.0;
        for _ in 0..10 {
            let now = progress.advance(0.99);
            assert!(now >= last && now <= 100.0);
            last = now;
        }
        assert!(progress.is_complete());
    }
}
