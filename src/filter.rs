pub const ALL_CATEGORIES: &str = "all";
pub const STAGGER_MS: u32 = 50;
pub const FADE_IN_DELAY_MS: u32 = 50;
pub const HIDE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Show after `delay_ms`, then fade in `FADE_IN_DELAY_MS` later.
    Show { delay_ms: u32 },
    /// Fade out now, drop from layout after `HIDE_DELAY_MS`.
    Hide,
}

pub fn matches(selected: &str, card_category: Option<&str>) -> bool {
    selected == ALL_CATEGORIES || card_category == Some(selected)
}

/// One action per card, in document order. The stagger uses the card's
/// position among all cards, not among the matching ones.
pub fn plan<'a, I>(selected: &str, card_categories: I) -> Vec<CardAction>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    card_categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            if matches(selected, category) {
                CardAction::Show {
                    delay_ms: u32::try_from(index)
                        .unwrap_or(u32::MAX)
                        .saturating_mul(STAGGER_MS),
                }
            } else {
                CardAction::Hide
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARDS: [Option<&str>; 4] = [Some("music"), Some("comedy"), None, Some("music")];

    #[test]
    fn all_shows_every_card() {
        assert_eq!(
            plan("all", CARDS),
            vec![
                CardAction::Show { delay_ms: 0 },
                CardAction::Show { delay_ms: 50 },
                CardAction::Show { delay_ms: 100 },
                CardAction::Show { delay_ms: 150 },
            ]
        );
    }

    #[test]
    fn specific_category_shows_exact_matches() {
        assert_eq!(
            plan("music", CARDS),
            vec![
                CardAction::Show { delay_ms: 0 },
                CardAction::Hide,
                CardAction::Hide,
                CardAction::Show { delay_ms: 150 },
            ]
        );
    }

    #[test]
    fn unknown_category_hides_everything() {
        assert!(plan("dance", CARDS).iter().all(|a| *a == CardAction::Hide));
    }

    #[test]
    fn matching_is_exact() {
        assert!(!matches("Music", Some("music")));
        assert!(!matches("", None));
        assert!(matches("all", None));
    }
}
