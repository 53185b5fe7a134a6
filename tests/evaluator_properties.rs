use holdem_table::cards::{Card, Rank, Suit};
use holdem_table::evaluator::{classify, Category};
use holdem_table::hand::Hand;
use proptest::prelude::*;

fn full_deck() -> Vec<Card> {
    Rank::ALL
        .iter()
        .flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s)))
        .collect()
}

prop_compose! {
    fn distinct_cards(n: usize)(cards in prop::sample::subsequence(full_deck(), n).prop_shuffle()) -> Vec<Card> {
        cards
    }
}

fn any_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Diamonds), Just(Suit::Hearts), Just(Suit::Spades),]
}

proptest! {
    #[test]
    fn card_id_round_trips(rank in any_rank(), suit in any_suit()) {
        let card = Card::new(rank, suit);
        let id = card.id();
        prop_assert_eq!(id.parse::<Card>().unwrap(), card);
        prop_assert_eq!(id.to_lowercase().parse::<Card>().unwrap().id(), id);
    }

    #[test]
    fn classification_ignores_community_order(cards in distinct_cards(7), seed in any::<u64>()) {
        let hand = Hand::from_slice(&cards[..2]).unwrap();
        let mut board = cards[2..].to_vec();
        let expected = holdem_table::evaluator::classify_holdem(&hand, &board).unwrap();

        let rotate = (seed % board.len() as u64) as usize;
        board.rotate_left(rotate);
        board.reverse();
        let shuffled = holdem_table::evaluator::classify_holdem(&hand, &board).unwrap();

        prop_assert_eq!(shuffled.category, expected.category);
        prop_assert_eq!(shuffled.score(), expected.score());
    }

    #[test]
    fn higher_category_always_scores_higher(a in distinct_cards(7), b in distinct_cards(7)) {
        let ca = classify(&a).unwrap();
        let cb = classify(&b).unwrap();
        if ca.category > cb.category {
            prop_assert!(ca.score() > cb.score());
        } else if ca.category < cb.category {
            prop_assert!(ca.score() < cb.score());
        }
    }

    #[test]
    fn best_five_come_from_the_pool(cards in distinct_cards(6)) {
        let c = classify(&cards).unwrap();
        for card in c.best_five {
            prop_assert!(cards.contains(&card));
        }
    }

    #[test]
    fn royal_needs_suited_broadway(cards in distinct_cards(7)) {
        let c = classify(&cards).unwrap();
        if c.category == Category::RoyalFlush {
            let suit = c.best_five[0].suit();
            for rank in [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten] {
                prop_assert!(cards.contains(&Card::new(rank, suit)));
            }
        }
    }
}
