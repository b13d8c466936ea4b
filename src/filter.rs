use std::fmt;

use crate::config::FILTER_STAGGER_MS;

pub const ALL: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Tag(String),
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => tag == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    pub visible: bool,
    /// Entrance delay for visible cards, in milliseconds.
    pub reveal_delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub cards: Vec<CardView>,
    pub visible_count: usize,
}

impl FilterOutcome {
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn label(&self) -> String {
        let noun = if self.total() == 1 { "project" } else { "projects" };
        format!("Showing {} of {} {noun}", self.visible_count, self.total())
    }
}

pub fn apply_filter<S: AsRef<str>>(filter: &Filter, categories: &[S]) -> FilterOutcome {
    let mut visible_count = 0;
    let cards = categories
        .iter()
        .map(|category| {
            if filter.matches(category.as_ref()) {
                let reveal_delay_ms = visible_count * FILTER_STAGGER_MS;
                visible_count += 1;
                CardView {
                    visible: true,
                    reveal_delay_ms,
                }
            } else {
                CardView {
                    visible: false,
                    reveal_delay_ms: 0,
                }
            }
        })
        .collect();

    FilterOutcome {
        cards,
        visible_count: visible_count as usize,
    }
}

/// Keys that open a focused project tile.
pub fn activates_tile(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: [&str; 6] = ["ml", "viz", "ml", "data", "web", "ml"];

    #[test]
    fn all_shows_every_card() {
        let outcome = apply_filter(&Filter::All, &CATEGORIES);
        assert!(outcome.cards.iter().all(|card| card.visible));
        assert_eq!(outcome.visible_count, CATEGORIES.len());
    }

    #[test]
    fn tag_shows_only_matching_cards() {
        for tag in ["ml", "viz", "data", "web", "missing"] {
            let filter = Filter::parse(tag);
            let outcome = apply_filter(&filter, &CATEGORIES);
            for (card, category) in outcome.cards.iter().zip(CATEGORIES) {
                assert_eq!(card.visible, category == tag, "{tag} vs {category}");
            }
        }
    }

    #[test]
    fn matching_is_exact_not_substring() {
        let outcome = apply_filter(&Filter::parse("ml"), &["html", "ml"]);
        assert!(!outcome.cards[0].visible);
        assert!(outcome.cards[1].visible);
    }

    #[test]
    fn visible_cards_are_staggered_in_order() {
        let outcome = apply_filter(&Filter::parse("ml"), &CATEGORIES);
        let delays: Vec<u32> = outcome
            .cards
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.reveal_delay_ms)
            .collect();
        assert_eq!(delays, vec![0, FILTER_STAGGER_MS, 2 * FILTER_STAGGER_MS]);
        assert_eq!(outcome.label(), "Showing 3 of 6 projects");
    }

    #[test]
    fn parse_recognises_all() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("ml").to_string(), "ml");
    }

    #[test]
    fn enter_and_space_activate_tiles() {
        assert!(activates_tile("Enter"));
        assert!(activates_tile(" "));
        assert!(!activates_tile("Tab"));
        assert!(!activates_tile("Spacebar"));
    }
}
