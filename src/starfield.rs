pub const NARROW_VIEWPORT: f64 = 768.0;
pub const NARROW_STAR_COUNT: usize = 50;
pub const WIDE_STAR_COUNT: usize = 100;
const MAX_DELAY_SECS: f64 = 4.0;
const REDUCED_MOTION_STYLE: &str = " animation-duration: 0.01ms; transition-duration: 0.01ms;";

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
}

impl Star {
    pub fn style(&self, reduced_motion: bool) -> String {
        let mut style = format!(
            "left: {}%; top: {}%; animation-delay: {}s;",
            self.left, self.top, self.delay
        );
        if reduced_motion {
            style.push_str(REDUCED_MOTION_STYLE);
        }
        style
    }
}

pub fn star_count(viewport_width: f64) -> usize {
    if viewport_width < NARROW_VIEWPORT {
        NARROW_STAR_COUNT
    } else {
        WIDE_STAR_COUNT
    }
}

pub fn generate(count: usize, rng: &mut fastrand::Rng) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left: rng.f64() * 100.0,
            top: rng.f64() * 100.0,
            delay: rng.f64() * MAX_DELAY_SECS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_depends_on_viewport() {
        assert_eq!(star_count(375.0), 50);
        assert_eq!(star_count(767.9), 50);
        assert_eq!(star_count(768.0), 100);
        assert_eq!(star_count(1920.0), 100);
    }

    #[test]
    fn stars_stay_inside_the_field() {
        let mut rng = fastrand::Rng::with_seed(7);
        let stars = generate(200, &mut rng);
        assert_eq!(stars.len(), 200);
        for star in &stars {
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.0..100.0).contains(&star.top));
            assert!((0.0..MAX_DELAY_SECS).contains(&star.delay));
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = generate(5, &mut fastrand::Rng::with_seed(42));
        let b = generate(5, &mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
        assert!(a[0].style(false).starts_with("left: "));
    }

    #[test]
    fn reduced_motion_shortens_star_animation() {
        let star = Star {
            left: 10.0,
            top: 20.0,
            delay: 1.5,
        };
        assert_eq!(star.style(false), "left: 10%; top: 20%; animation-delay: 1.5s;");
        assert_eq!(
            star.style(true),
            "left: 10%; top: 20%; animation-delay: 1.5s; animation-duration: 0.01ms; transition-duration: 0.01ms;"
        );
    }
}
