use super::Category;
use crate::cards::Card;
use std::fmt;

/// Totally ordered hand score. Higher is better.
///
/// Decimal layout: the category marker digit (none for High Card) followed by
/// the weight of each of the five scoring cards, two digits each, in scoring
/// order. A Royal Flush is always `91413121110`; the four Aces with an Eight
/// kicker score `71414141408`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u64);

impl Score {
    pub const ROYAL_FLUSH: Score = Score(91_413_121_110);

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Encode a category and its five scoring cards.
    pub fn encode(category: Category, cards: &[Card; 5]) -> Self {
        let marker = category.marker().map_or(0, u64::from);
        let value = cards.iter().fold(marker, |acc, card| acc * 100 + u64::from(card.weight()));
        Score(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
