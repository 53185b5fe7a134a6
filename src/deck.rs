use crate::cards::{Card, Rank, Suit, SuitParseError, ValueParseError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("expected 13 value tokens, got {0}")]
    ValueCount(usize),
    #[error("expected 4 suit tokens, got {0}")]
    SuitCount(usize),
    #[error("duplicate value token: {0}")]
    DuplicateValue(Rank),
    #[error("duplicate suit token: {0}")]
    DuplicateSuit(Suit),
    #[error(transparent)]
    Value(#[from] ValueParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

/// A deck of at most 52 distinct cards. Cards are dealt from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_table::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::build(&Rank::ALL, &Suit::ALL)
    }

    /// Build a deck from value and suit tokens.
    ///
    /// Exactly 13 distinct value tokens and 4 distinct suit tokens are
    /// required; the result holds every combination once, unshuffled.
    ///
    /// ```
    /// use holdem_table::deck::{Deck, DeckError};
    ///
    /// let values = ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];
    /// let deck = Deck::from_tokens(&values, &["c", "d", "h", "s"]).unwrap();
    /// assert_eq!(deck.len(), 52);
    ///
    /// let err = Deck::from_tokens(&values, &["c", "d", "h", "h"]).unwrap_err();
    /// assert!(matches!(err, DeckError::DuplicateSuit(_)));
    /// ```
    pub fn from_tokens(values: &[&str], suits: &[&str]) -> Result<Self, DeckError> {
        if values.len() != Rank::ALL.len() {
            return Err(DeckError::ValueCount(values.len()));
        }
        if suits.len() != Suit::ALL.len() {
            return Err(DeckError::SuitCount(suits.len()));
        }

        let mut ranks = Vec::with_capacity(values.len());
        let mut seen_ranks = HashSet::new();
        for token in values {
            let rank = Rank::from_str(token)?;
            if !seen_ranks.insert(rank) {
                return Err(DeckError::DuplicateValue(rank));
            }
            ranks.push(rank);
        }

        let mut parsed_suits = Vec::with_capacity(suits.len());
        let mut seen_suits = HashSet::new();
        for token in suits {
            let suit = Suit::from_str(token)?;
            if !seen_suits.insert(suit) {
                return Err(DeckError::DuplicateSuit(suit));
            }
            parsed_suits.push(suit);
        }

        Ok(Self::build(&ranks, &parsed_suits))
    }

    fn build(ranks: &[Rank], suits: &[Suit]) -> Self {
        let mut cards = Vec::with_capacity(ranks.len() * suits.len());
        for &s in suits {
            for &r in ranks {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Remaining cards, bottom first.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal one card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `n` cards from the top of the deck.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.deal()).collect()
    }

    /// Discard the top card.
    pub fn burn(&mut self) -> Option<Card> {
        self.deal()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [&str; 13] = ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        let set: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(d.len(), 52);
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn from_tokens_rejects_bad_composition() {
        assert_eq!(
            Deck::from_tokens(&VALUES[..12], &["C", "D", "H", "S"]).unwrap_err(),
            DeckError::ValueCount(12)
        );
        assert_eq!(Deck::from_tokens(&VALUES, &["C", "D", "H"]).unwrap_err(), DeckError::SuitCount(3));

        let mut dup = VALUES;
        dup[0] = "a";
        assert_eq!(
            Deck::from_tokens(&dup, &["C", "D", "H", "S"]).unwrap_err(),
            DeckError::DuplicateValue(Rank::Ace)
        );
        assert!(matches!(
            Deck::from_tokens(&VALUES, &["C", "D", "H", "Z"]),
            Err(DeckError::Suit(SuitParseError::Invalid(_)))
        ));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_shrinks_by_one() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.deal().unwrap();
        let c2 = d.deal().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        assert!(!d.contains(&c1));
        let flop = d.deal_n(3);
        assert_eq!(flop.len(), 3);
        assert_eq!(d.len(), 47);
    }

    #[test]
    fn empty_deck_deals_nothing() {
        let mut d = Deck::standard();
        let all = d.deal_n(60);
        assert_eq!(all.len(), 52);
        assert!(d.is_empty());
        assert_eq!(d.burn(), None);
    }
}
