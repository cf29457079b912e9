pub const TICK_MS: u32 = 1000;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_millis(distance: i64) -> Self {
        Self {
            days: distance / DAY_MS,
            hours: (distance % DAY_MS) / HOUR_MS,
            minutes: (distance % HOUR_MS) / MINUTE_MS,
            seconds: (distance % MINUTE_MS) / SECOND_MS,
        }
    }

    /// Display order with labels. Days are padded but may run past two digits.
    pub fn fields(&self) -> [(String, &'static str); 4] {
        [
            (pad2(self.days), "Days"),
            (pad2(self.hours), "Hours"),
            (pad2(self.minutes), "Minutes"),
            (pad2(self.seconds), "Seconds"),
        ]
    }
}

fn pad2(value: i64) -> String {
    format!("{value:02}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownFrame {
    Running(Remaining),
    Started,
}

impl CountdownFrame {
    pub fn at(target_ms: i64, now_ms: i64) -> Self {
        let distance = target_ms - now_ms;
        if distance < 0 {
            Self::Started
        } else {
            Self::Running(Remaining::from_millis(distance))
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Whether the one-second interval should be alive for the current frame.
pub fn should_tick(page_hidden: bool, frame: &CountdownFrame) -> bool {
    !page_hidden && !frame.is_started()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn remaining(days: i64, hours: i64, minutes: i64, seconds: i64) -> Remaining {
        Remaining {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    #[test]
    fn decomposes_remaining_distance() {
        let distance = 3 * DAY_MS + 4 * HOUR_MS + 5 * MINUTE_MS + 6 * SECOND_MS + 999;
        assert_eq!(
            CountdownFrame::at(distance + 1_000, 1_000),
            CountdownFrame::Running(remaining(3, 4, 5, 6))
        );
    }

    #[test]
    fn decomposition_recombines_to_whole_seconds() {
        for distance in [0, 999, 59_999, HOUR_MS - 1, DAY_MS, 123 * DAY_MS + 7_777_777] {
            let r = Remaining::from_millis(distance);
            let whole = r.days * DAY_MS + r.hours * HOUR_MS + r.minutes * MINUTE_MS + r.seconds * SECOND_MS;
            assert_eq!(whole, distance - distance % SECOND_MS);
            assert!(r.hours < 24 && r.minutes < 60 && r.seconds < 60);
        }
    }

    #[test]
    fn fields_are_zero_padded() {
        let fields = remaining(0, 9, 10, 1).fields();
        assert_eq!(
            fields,
            [
                ("00".to_string(), "Days"),
                ("09".to_string(), "Hours"),
                ("10".to_string(), "Minutes"),
                ("01".to_string(), "Seconds"),
            ]
        );
        assert_eq!(remaining(120, 0, 0, 0).fields()[0].0, "120");
    }

    #[test]
    fn target_instant_still_counts_as_running() {
        assert_eq!(CountdownFrame::at(5_000, 5_000), CountdownFrame::Running(remaining(0, 0, 0, 0)));
        assert_eq!(CountdownFrame::at(5_000, 5_001), CountdownFrame::Started);
    }

    #[test]
    fn ticking_stops_for_good_once_started() {
        let target = 10 * SECOND_MS;
        let mut renders = Vec::new();
        let mut now = 7 * SECOND_MS;
        let mut frame = CountdownFrame::at(target, now);

        while should_tick(false, &frame) {
            now += SECOND_MS;
            frame = CountdownFrame::at(target, now);
            renders.push(frame);
        }

        assert_eq!(renders.iter().filter(|f| f.is_started()).count(), 1);
        assert_eq!(renders.last(), Some(&CountdownFrame::Started));
        assert!(!should_tick(false, &frame));
    }

    #[test]
    fn hidden_page_suspends_ticking() {
        let frame = CountdownFrame::at(DAY_MS, 0);
        assert!(should_tick(false, &frame));
        assert!(!should_tick(true, &frame));
    }
}
