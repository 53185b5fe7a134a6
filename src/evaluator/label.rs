use super::Category;
use crate::cards::Card;

/// Human-readable sentence for a classified hand.
///
/// Primary ranks are named in plural, kickers in singular.
pub fn describe(category: Category, best: &[Card; 5]) -> String {
    let name = |i: usize| best[i].value().name();
    let plural = |i: usize| best[i].value().plural();
    match category {
        Category::RoyalFlush => category.name().to_string(),
        Category::StraightFlush | Category::Straight => {
            format!("{}, {} to {}", category.name(), name(4), name(0))
        }
        Category::FourOfAKind => {
            format!("{}, {} with kicker {}", category.name(), plural(0), name(4))
        }
        Category::FullHouse => {
            format!("{}, {} full of {}", category.name(), plural(0), plural(3))
        }
        Category::Flush => format!(
            "{} in {}, {} high with {}",
            category.name(),
            best[0].suit().name(),
            name(0),
            join(&[name(1), name(2), name(3), name(4)])
        ),
        Category::ThreeOfAKind => format!(
            "{}, {} with kickers {}",
            category.name(),
            plural(0),
            join(&[name(3), name(4)])
        ),
        Category::TwoPair => format!(
            "{}, {} and {} with kicker {}",
            category.name(),
            plural(0),
            plural(2),
            name(4)
        ),
        Category::Pair => format!(
            "Pair of {} with kickers {}",
            plural(0),
            join(&[name(2), name(3), name(4)])
        ),
        Category::HighCard => format!(
            "{}, {} with kickers {}",
            category.name(),
            name(0),
            join(&[name(1), name(2), name(3), name(4)])
        ),
    }
}

/// "a", "a and b", "a, b and c".
fn join(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn join_uses_commas_and_conjunction() {
        assert_eq!(join(&["Ace"]), "Ace");
        assert_eq!(join(&["Ace", "Nine"]), "Ace and Nine");
        assert_eq!(join(&["Ace", "Nine", "Two"]), "Ace, Nine and Two");
    }

    #[test]
    fn four_of_a_kind_names_plural_and_kicker() {
        let best = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Eight, Suit::Clubs),
        ];
        assert_eq!(describe(Category::FourOfAKind, &best), "Four of a Kind, Aces with kicker Eight");
    }

    #[test]
    fn full_house_names_both_ranks() {
        let best = [
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Six, Suit::Diamonds),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Ten, Suit::Clubs),
        ];
        assert_eq!(describe(Category::FullHouse, &best), "Full House, Sixes full of Tens");
    }
}
