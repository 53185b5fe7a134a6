use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The thirteen card ranks, Two (low) to Ace (high).
///
/// The catalog data (token, names, default weight) lives on the enum as
/// `const fn` lookups; the only per-card mutable attribute is the Ace weight,
/// which is carried by [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Default weight, 2..=14.
    pub const fn weight(self) -> u8 {
        self as u8
    }

    /// Token used in card ids.
    pub const fn id(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            Rank::Two => "Twos",
            Rank::Three => "Threes",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueParseError {
    #[error("invalid card value: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.id() == upper)
            .ok_or_else(|| ValueParseError::Invalid(s.to_string()))
    }
}

/// A card value: a [`Rank`] plus its current weight.
///
/// Identity is the rank alone, so lowering an Ace does not make it a
/// different card.
///
/// ```
/// use holdem_table::cards::{Rank, Value};
///
/// let mut ace = Value::new(Rank::Ace);
/// assert_eq!(ace.weight(), 14);
/// ace.set_ace_low(true);
/// assert_eq!(ace.weight(), 1);
/// assert_eq!(ace, Value::new(Rank::Ace));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Value {
    rank: Rank,
    weight: u8,
}

impl Value {
    pub const fn new(rank: Rank) -> Self {
        Self { rank, weight: rank.weight() }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    pub const fn weight(self) -> u8 {
        self.weight
    }

    pub const fn id(self) -> &'static str {
        self.rank.id()
    }

    pub const fn name(self) -> &'static str {
        self.rank.name()
    }

    pub const fn plural(self) -> &'static str {
        self.rank.plural()
    }

    /// Toggle the Ace between 14 and 1. No effect on other ranks.
    pub fn set_ace_low(&mut self, low: bool) {
        if self.rank == Rank::Ace {
            self.weight = if low { 1 } else { Rank::Ace.weight() };
        }
    }

    pub const fn is_ace_low(self) -> bool {
        matches!(self.rank, Rank::Ace) && self.weight == 1
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl From<Rank> for Value {
    fn from(rank: Rank) -> Self {
        Value::new(rank)
    }
}

/// The four suits. Suits carry no weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn id(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Suit::ALL
            .iter()
            .copied()
            .find(|suit| suit.id() == upper)
            .ok_or_else(|| SuitParseError::Invalid(s.to_string()))
    }
}

/// A playing card: one value and one suit.
///
/// The textual id is `"<value>;<suit>"`, parsed case-insensitively and
/// rendered upper-case.
///
/// ```
/// use holdem_table::cards::{Card, Rank, Suit};
///
/// let card: Card = "10;h".parse().unwrap();
/// assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(card.id(), "10;H");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: Value,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { value: Value::new(rank), suit }
    }

    pub const fn value(self) -> Value {
        self.value
    }

    pub const fn rank(self) -> Rank {
        self.value.rank()
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn weight(self) -> u8 {
        self.value.weight()
    }

    pub fn id(self) -> String {
        format!("{};{}", self.value.id(), self.suit.id())
    }

    /// Copy of this card with an Ace lowered to weight 1. Other ranks are
    /// returned unchanged.
    pub fn with_ace_low(self) -> Self {
        let mut value = self.value;
        value.set_ace_low(true);
        Self { value, suit: self.suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.value.id(), self.suit.id())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("malformed card id: '{0}'")]
    Format(String),
    #[error(transparent)]
    Value(#[from] ValueParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, suit) = s.split_once(';').ok_or_else(|| CardParseError::Format(s.to_string()))?;
        if value.trim().is_empty() || suit.trim().is_empty() || suit.contains(';') {
            return Err(CardParseError::Format(s.to_string()));
        }
        let rank = Rank::from_str(value)?;
        let suit = Suit::from_str(suit)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple card ids separated by whitespace or commas.
///
/// ```
/// use holdem_table::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("A;S, K;D 10;C").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_tokens_and_names() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::from_str("10").unwrap(), Rank::Ten);
        assert_eq!(Rank::from_str("q").unwrap(), Rank::Queen);
        assert_eq!(Rank::Six.plural(), "Sixes");
        assert!(Rank::from_str("1").is_err());
        assert!(Rank::from_str("T").is_err());
    }

    #[test]
    fn suit_tokens_and_symbols() {
        assert_eq!(Suit::Spades.to_string(), "S");
        assert_eq!(Suit::from_str("h").unwrap(), Suit::Hearts);
        assert_eq!(Suit::Diamonds.symbol(), '♦');
        assert!(matches!(Suit::from_str("x"), Err(SuitParseError::Invalid(_))));
    }

    #[test]
    fn card_id_is_upper_cased() {
        let card = Card::from_str("a;s").unwrap();
        assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(card.id(), "A;S");
        assert_eq!(card.to_string(), "A;S");
    }

    #[test]
    fn malformed_ids_are_format_errors() {
        for bad in ["", "AS", ";S", "A;", " ; ", "A; ", "A;S;X", "A;;S"] {
            assert!(
                matches!(Card::from_str(bad), Err(CardParseError::Format(_))),
                "expected format error for {bad:?}"
            );
        }
    }

    #[test]
    fn unknown_tokens_are_value_or_suit_errors() {
        assert!(matches!(Card::from_str("Z;S"), Err(CardParseError::Value(_))));
        assert!(matches!(Card::from_str("A;X"), Err(CardParseError::Suit(_))));
    }

    #[test]
    fn ace_low_keeps_identity() {
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        let low = ace.with_ace_low();
        assert_eq!(low.weight(), 1);
        assert!(low.value().is_ace_low());
        assert_eq!(low, ace);

        let king = Card::new(Rank::King, Suit::Clubs).with_ace_low();
        assert_eq!(king.weight(), 13);
    }
}
