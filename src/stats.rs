use std::collections::HashSet;

pub const COUNT_DURATION_MS: f64 = 2000.0;

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountSample {
    pub value: i64,
    pub done: bool,
}

/// Count-up from zero to `target`, driven by animation-frame timestamps.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    target: i64,
    started_at: f64,
    duration: f64,
}

impl CountUp {
    pub fn new(target: i64, started_at: f64) -> Self {
        Self {
            target,
            started_at,
            duration: COUNT_DURATION_MS,
        }
    }

    pub fn sample(&self, now: f64) -> CountSample {
        let progress = ((now - self.started_at) / self.duration).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return CountSample {
                value: self.target,
                done: true,
            };
        }

        CountSample {
            value: (ease_out_cubic(progress) * self.target as f64).floor() as i64,
            done: false,
        }
    }
}

/// Stat boxes whose counter already ran, by position on the page.
#[derive(Debug, Default)]
pub struct AnimatedStats {
    started: HashSet<usize>,
}

impl AnimatedStats {
    /// True the first time `position` is claimed, false on every later call.
    pub fn claim(&mut self, position: usize) -> bool {
        self.started.insert(position)
    }
}

/// Reads a `data-count` value the way `parseInt` does: optional sign, then
/// leading digits, trailing garbage ignored.
pub fn parse_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..digits_end].parse().ok()?;

    Some(if negative { -magnitude } else { magnitude })
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn count_is_monotonic_and_lands_on_target() {
        let count = CountUp::new(1500, 100.0);
        let mut previous = 0;
        let mut now = 100.0;

        while now < 100.0 + COUNT_DURATION_MS {
            let sample = count.sample(now);
            assert!(!sample.done);
            assert!(sample.value >= previous);
            assert!(sample.value <= 1500);
            previous = sample.value;
            now += 16.7;
        }

        assert_eq!(count.sample(100.0 + COUNT_DURATION_MS), CountSample { value: 1500, done: true });
        assert_eq!(count.sample(10_000.0), CountSample { value: 1500, done: true });
    }

    #[test]
    fn count_starts_at_zero() {
        let count = CountUp::new(42, 500.0);
        assert_eq!(count.sample(500.0).value, 0);
        assert_eq!(count.sample(400.0).value, 0);
    }

    #[test]
    fn each_stat_starts_once() {
        let mut animated = AnimatedStats::default();
        let visibility = [0, 2, 0, 0, 1, 2, 1];
        let started: Vec<usize> = visibility
            .into_iter()
            .filter(|position| animated.claim(*position))
            .collect();

        assert_eq!(started, vec![0, 2, 1]);
        assert!(!animated.claim(0));
        assert!(animated.claim(3));
    }

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_count("250"), Some(250));
        assert_eq!(parse_count("  15k+"), Some(15));
        assert_eq!(parse_count("1,200"), Some(1));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count("+8"), Some(8));
        assert_eq!(parse_count("many"), None);
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("-"), None);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
    }
}
