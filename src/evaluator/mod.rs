pub(crate) mod label;
pub(crate) mod pool;
pub(crate) mod rank_groups;
pub(crate) mod score;
pub(crate) mod straight;

pub use score::Score;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;
use pool::Pool;
use std::collections::HashSet;
use std::fmt;

/// Smallest pool that can be classified (hole cards plus a flop).
pub const MIN_POOL: usize = 5;
/// Hole cards plus a full board.
pub const MAX_POOL: usize = 7;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Every category, in the order they are checked (strongest first).
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Leading score digit. High Card has none.
    pub const fn marker(self) -> Option<u8> {
        match self {
            Category::HighCard => None,
            other => Some(other as u8),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification result. `score` drives ordering.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Classification {
    pub category: Category,
    /// The five scoring cards in scoring order. A wheel ends with an Ace
    /// weighted 1.
    pub best_five: [Card; 5],
    score: Score,
    label: String,
}

impl Classification {
    fn new(category: Category, best_five: [Card; 5]) -> Self {
        let score = Score::encode(category, &best_five);
        let label = label::describe(category, &best_five);
        Self { category, best_five, score, label }
    }

    pub const fn score(&self) -> Score {
        self.score
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Classification {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for Classification {}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("duplicate cards in showdown")]
    DuplicateCards,
    #[error("expected 5 to 7 cards to classify, got {0}")]
    CardCount(usize),
}

/// Classify a pool of 5 to 7 distinct cards into its best five-card hand.
///
/// ```
/// use holdem_table::cards::parse_cards;
/// use holdem_table::evaluator::{classify, Category};
///
/// let cards = parse_cards("A;H A;D A;C A;S 8;C 2;D 4;C").unwrap();
/// let c = classify(&cards).unwrap();
/// assert_eq!(c.category, Category::FourOfAKind);
/// assert_eq!(c.score().raw(), 71414141408);
/// ```
pub fn classify(cards: &[Card]) -> Result<Classification, EvalError> {
    if !(MIN_POOL..=MAX_POOL).contains(&cards.len()) {
        return Err(EvalError::CardCount(cards.len()));
    }
    let unique: HashSet<Card> = cards.iter().copied().collect();
    if unique.len() != cards.len() {
        return Err(EvalError::DuplicateCards);
    }

    let pool = Pool::new(cards);
    let (category, best_five) = detect(&pool).ok_or(EvalError::CardCount(cards.len()))?;
    Ok(Classification::new(category, best_five))
}

/// Checks categories strongest first and stops at the first match.
///
/// A royal flush is any straight flush led by an Ace, and straights are found
/// by scanning for the highest run with no gap limit. Both depart on purpose
/// from a plain top-five reading, which misses a royal beside an off-suit Ace
/// and the wheel in A-Q-9-5-4-3-2.
fn detect(pool: &Pool) -> Option<(Category, [Card; 5])> {
    let groups = pool.rank_groups();

    if let Some(suit) = pool.flush_suit() {
        if let Some(run) = straight::find_run(&pool.suited(suit)) {
            let category = if run[0].rank() == Rank::Ace {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            };
            return Some((category, run));
        }
    }

    if let Some(quad) = groups.exactly(4) {
        let best = five(pool.of_rank(quad).chain(pool.kickers(&[quad], 1)))?;
        return Some((Category::FourOfAKind, best));
    }

    if let Some(trips) = groups.exactly(3) {
        if let Some(pair) = groups.at_least_except(2, trips) {
            let best = five(pool.of_rank(trips).chain(pool.of_rank(pair).take(2)))?;
            return Some((Category::FullHouse, best));
        }
    }

    if let Some(suit) = pool.flush_suit() {
        return Some((Category::Flush, five(pool.suited(suit))?));
    }

    if let Some(run) = straight::find_run(pool.cards()) {
        return Some((Category::Straight, run));
    }

    if let Some(trips) = groups.exactly(3) {
        let best = five(pool.of_rank(trips).chain(pool.kickers(&[trips], 2)))?;
        return Some((Category::ThreeOfAKind, best));
    }

    match groups.all_exactly(2).as_slice() {
        [high, low, ..] => {
            let best = five(
                pool.of_rank(*high)
                    .chain(pool.of_rank(*low))
                    .chain(pool.kickers(&[*high, *low], 1)),
            )?;
            Some((Category::TwoPair, best))
        }
        [pair] => {
            let best = five(pool.of_rank(*pair).chain(pool.kickers(&[*pair], 3)))?;
            Some((Category::Pair, best))
        }
        [] => Some((Category::HighCard, five(pool.cards().iter().copied())?)),
    }
}

fn five(cards: impl IntoIterator<Item = Card>) -> Option<[Card; 5]> {
    cards.into_iter().take(5).collect::<Vec<_>>().try_into().ok()
}

/// Classify a hand's hole cards together with the community cards.
///
/// ```
/// use holdem_table::cards::parse_cards;
/// use holdem_table::evaluator::{classify_holdem, Category};
/// use holdem_table::hand::Hand;
///
/// let hand: Hand = "A;S K;S".parse().unwrap();
/// let board = parse_cards("Q;S J;S 10;S 3;D 7;H").unwrap();
/// let c = classify_holdem(&hand, &board).unwrap();
/// assert_eq!(c.category, Category::RoyalFlush);
/// assert_eq!(c.score().raw(), 91413121110);
/// ```
pub fn classify_holdem(hand: &Hand, community: &[Card]) -> Result<Classification, EvalError> {
    let mut pool = Vec::with_capacity(2 + community.len());
    pool.extend_from_slice(&hand.as_array());
    pool.extend_from_slice(community);
    classify(&pool)
}

/// Compare two hands on a shared board.
///
/// ```
/// use holdem_table::cards::parse_cards;
/// use holdem_table::evaluator::compare_holdem;
/// use holdem_table::hand::Hand;
/// use std::cmp::Ordering;
///
/// let board = parse_cards("Q;C J;D 9;H 3;S 2;C").unwrap();
/// let aces: Hand = "A;S A;H".parse().unwrap();
/// let kings: Hand = "K;S K;H".parse().unwrap();
/// assert_eq!(compare_holdem(&aces, &kings, &board).unwrap(), Ordering::Greater);
/// ```
pub fn compare_holdem(a: &Hand, b: &Hand, community: &[Card]) -> Result<Ordering, EvalError> {
    let ca = classify_holdem(a, community)?;
    let cb = classify_holdem(b, community)?;
    Ok(ca.cmp(&cb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn classify_str(s: &str) -> Classification {
        classify(&parse_cards(s).expect("valid cards")).expect("classifiable")
    }

    #[test]
    fn rejects_short_and_long_pools() {
        let four = parse_cards("A;S K;S Q;S J;S").unwrap();
        assert_eq!(classify(&four).unwrap_err(), EvalError::CardCount(4));
        let eight = parse_cards("A;S K;S Q;S J;S 10;S 9;S 8;S 7;S").unwrap();
        assert_eq!(classify(&eight).unwrap_err(), EvalError::CardCount(8));
    }

    #[test]
    fn rejects_duplicates() {
        let cards = parse_cards("A;S A;S Q;S J;S 10;S").unwrap();
        assert_eq!(classify(&cards).unwrap_err(), EvalError::DuplicateCards);
    }

    #[test]
    fn royal_flush_with_extra_ace_above() {
        let c = classify_str("A;S A;D K;S Q;S J;S 10;S 2;C");
        assert_eq!(c.category, Category::RoyalFlush);
        assert_eq!(c.score(), Score::ROYAL_FLUSH);
    }

    #[test]
    fn full_house_from_two_trips() {
        let c = classify_str("K;S K;D K;H Q;S Q;D Q;H 2;C");
        assert_eq!(c.category, Category::FullHouse);
        assert_eq!(c.score().raw(), 61313131212);
    }

    #[test]
    fn two_pair_kicker_may_come_from_third_pair() {
        let c = classify_str("K;S K;D Q;S Q;D J;H J;C 2;C");
        assert_eq!(c.category, Category::TwoPair);
        assert_eq!(c.score().raw(), 21313121211);
    }

    #[test]
    fn flush_beats_straight_in_same_pool() {
        let c = classify_str("9;H 8;D 7;H 6;H 5;C 2;H K;H");
        assert_eq!(c.category, Category::Flush);
        assert_eq!(c.score().raw(), 51309070602);
    }

    #[test]
    fn wheel_straight_flush_is_not_royal() {
        let c = classify_str("A;C 2;C 3;C 4;C 5;C K;D Q;H");
        assert_eq!(c.category, Category::StraightFlush);
        assert_eq!(c.score().raw(), 80504030201);
    }

    #[test]
    fn five_card_pool_is_supported() {
        let c = classify_str("A;H K;D 7;S 5;C 2;D");
        assert_eq!(c.category, Category::HighCard);
        assert_eq!(c.score().raw(), 1413070502);
        assert_eq!(c.label(), "High Card, Ace with kickers King, Seven, Five and Two");
    }

    #[test]
    fn category_markers_are_ordinals() {
        for category in Category::ALL {
            match category {
                Category::HighCard => assert_eq!(category.marker(), None),
                other => assert_eq!(other.marker(), Some(other.ordinal())),
            }
        }
    }
}
