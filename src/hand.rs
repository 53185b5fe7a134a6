use crate::cards::{parse_cards, Card};
use crate::evaluator::{classify_holdem, Classification, EvalError};
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// A player's two private hole cards, plus the last classification made
/// against the community cards.
///
/// ```
/// use holdem_table::cards::{parse_cards, Card, Rank, Suit};
/// use holdem_table::evaluator::Category;
/// use holdem_table::hand::Hand;
///
/// let mut hand = Hand::try_new(
///     Card::new(Rank::Nine, Suit::Hearts),
///     Card::new(Rank::Eight, Suit::Hearts),
/// ).unwrap();
/// let board = parse_cards("7;H 6;H 5;H 2;D 4;C").unwrap();
/// let c = hand.classify(&board).unwrap();
/// assert_eq!(c.category, Category::StraightFlush);
/// assert_eq!(c.score().raw(), 80908070605);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    first: Card,
    second: Card,
    classification: Option<Classification>,
}

impl Hand {
    pub fn try_new(first: Card, second: Card) -> Result<Self, HandError> {
        if first == second {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self { first, second, classification: None })
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }

    /// Return the first (left) hole card.
    pub fn first(&self) -> Card {
        self.first
    }

    /// Return the second (right) hole card.
    pub fn second(&self) -> Card {
        self.second
    }

    /// Return both hole cards as a fixed array.
    pub fn as_array(&self) -> [Card; 2] {
        [self.first, self.second]
    }

    /// Classify the best hand made with `community` and remember it.
    ///
    /// Fails with [`EvalError::DuplicateCards`] when any community card
    /// repeats a hole card or another community card. A failed call leaves
    /// the previous classification untouched.
    pub fn classify(&mut self, community: &[Card]) -> Result<&Classification, HandError> {
        let classification = classify_holdem(self, community)?;
        Ok(self.classification.insert(classification))
    }

    /// The result of the last successful [`Hand::classify`].
    pub fn classification(&self) -> Option<&Classification> {
        self.classification.as_ref()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}
