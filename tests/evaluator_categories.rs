use holdem_table::cards::parse_cards;
use holdem_table::evaluator::{classify, Category, Classification};
use holdem_table::hand::Hand;

fn holdem(hole: &str, board: &str) -> Classification {
    let mut hand: Hand = hole.parse().unwrap();
    let board = parse_cards(board).unwrap();
    hand.classify(&board).unwrap().clone()
}

fn seven(cards: &str) -> Classification {
    classify(&parse_cards(cards).unwrap()).unwrap()
}

#[test]
fn category_royal_flush() {
    let c = holdem("A;S K;S", "Q;S J;S 10;S 3;D 7;H");
    assert_eq!(c.category, Category::RoyalFlush);
    assert_eq!(c.score().raw(), 91413121110);
    assert_eq!(c.label(), "Royal Flush");
}

#[test]
fn category_straight_flush() {
    let c = holdem("9;H 8;H", "7;H 6;H 5;H 2;D 4;C");
    assert_eq!(c.category, Category::StraightFlush);
    assert_eq!(c.score().raw(), 80908070605);
    assert_eq!(c.label(), "Straight Flush, Five to Nine");
}

#[test]
fn category_four_of_a_kind() {
    let c = holdem("A;H A;D", "A;C A;S 8;C 2;D 4;C");
    assert_eq!(c.category, Category::FourOfAKind);
    assert_eq!(c.score().raw(), 71414141408);
}

#[test]
fn category_full_house() {
    let c = seven("3;C 3;D 3;H J;S J;C 9;D 2;S");
    assert_eq!(c.category, Category::FullHouse);
    assert_eq!(c.score().raw(), 60303031111);
    assert_eq!(c.label(), "Full House, Threes full of Jacks");
}

#[test]
fn category_flush() {
    let c = seven("K;H 10;H 8;H 6;H 3;H 2;C 4;D");
    assert_eq!(c.category, Category::Flush);
    assert_eq!(c.score().raw(), 51310080603);
}

#[test]
fn category_straight_broadway_off_suit() {
    let c = seven("A;C K;D Q;H J;S 10;C 2;D 3;D");
    assert_eq!(c.category, Category::Straight);
    assert_eq!(c.score().raw(), 41413121110);
}

#[test]
fn category_straight_wheel_scores_ace_low() {
    let c = seven("A;C 5;C 4;D 3;H 2;S 9;D K;H");
    assert_eq!(c.category, Category::Straight);
    assert_eq!(c.score().raw(), 40504030201);
    assert_eq!(c.label(), "Straight, Ace to Five");
}

#[test]
fn category_three_of_a_kind() {
    let c = seven("Q;C Q;D Q;H 10;S 2;C 7;D 4;H");
    assert_eq!(c.category, Category::ThreeOfAKind);
    assert_eq!(c.score().raw(), 31212121007);
    assert_eq!(c.label(), "Three of a Kind, Queens with kickers Ten and Seven");
}

#[test]
fn category_two_pair() {
    let c = seven("J;C J;D 4;H 4;S A;C 7;D 2;H");
    assert_eq!(c.category, Category::TwoPair);
    assert_eq!(c.score().raw(), 21111040414);
    assert_eq!(c.label(), "Two Pair, Jacks and Fours with kicker Ace");
}

#[test]
fn category_pair() {
    let c = seven("10;C 10;D A;H 8;S 5;C 3;D 2;H");
    assert_eq!(c.category, Category::Pair);
    assert_eq!(c.score().raw(), 11010140805);
    assert_eq!(c.label(), "Pair of Tens with kickers Ace, Eight and Five");
}

#[test]
fn category_high_card_has_no_marker() {
    let c = seven("A;H K;D 9;S 7;C 5;D 3;H 2;C");
    assert_eq!(c.category, Category::HighCard);
    assert_eq!(c.score().raw(), 1413090705);
}

#[test]
fn six_card_pool_after_turn() {
    let c = holdem("8;S 8;D", "8;C K;H K;D 2;S");
    assert_eq!(c.category, Category::FullHouse);
    assert_eq!(c.score().raw(), 60808081313);
}

#[test]
fn kicker_breaks_equal_pairs() {
    let board = "K;C K;D 9;H 6;S 2;C";
    let ace = holdem("A;S 3;H", board);
    let queen = holdem("Q;S 3;D", board);
    assert_eq!(ace.category, Category::Pair);
    assert!(ace > queen);
}

#[test]
fn board_plays_for_both_hands() {
    let board = "A;C K;D Q;H J;S 10;C";
    let a = holdem("2;S 3;H", board);
    let b = holdem("4;S 5;H", board);
    assert_eq!(a, b);
}
