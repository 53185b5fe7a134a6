use crate::cards::{Card, Rank};

/// Find the highest run of five consecutive weights in `cards`.
///
/// `cards` must be sorted by weight, highest first. Duplicate weights collapse
/// to their first card. When an Ace is present a copy weighted 1 is appended
/// so the wheel (5-4-3-2-A) is found. The run is returned high to low.
pub fn find_run(cards: &[Card]) -> Option<[Card; 5]> {
    let mut distinct: Vec<Card> = Vec::with_capacity(cards.len() + 1);
    for &card in cards {
        if distinct.last().map_or(true, |last| last.weight() != card.weight()) {
            distinct.push(card);
        }
    }
    if let Some(&ace) = distinct.first().filter(|c| c.rank() == Rank::Ace) {
        distinct.push(ace.with_ace_low());
    }

    let mut run: Vec<Card> = Vec::with_capacity(5);
    for card in distinct {
        match run.last() {
            Some(prev) if prev.weight() == card.weight() + 1 => run.push(card),
            _ => {
                run.clear();
                run.push(card);
            }
        }
        if run.len() == 5 {
            return run.try_into().ok();
        }
    }
    None
}
