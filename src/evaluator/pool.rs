use super::rank_groups::RankGroups;
use crate::cards::{Card, Rank, Suit};

/// The pooled hole and community cards, sorted once and shared by every
/// category check.
#[derive(Debug, Clone)]
pub struct Pool {
    cards: Vec<Card>,
    rank_groups: RankGroups,
    flush_suit: Option<Suit>,
}

impl Pool {
    pub fn new(cards: &[Card]) -> Self {
        // Weight first; suit only makes equal weights deterministic.
        let mut cards = cards.to_vec();
        cards.sort_by(|a, b| b.weight().cmp(&a.weight()).then(b.suit().cmp(&a.suit())));

        let rank_groups = RankGroups::from_cards(&cards);
        let flush_suit = Suit::ALL
            .iter()
            .copied()
            .find(|&suit| cards.iter().filter(|c| c.suit() == suit).count() >= 5);

        Self { cards, rank_groups, flush_suit }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn rank_groups(&self) -> &RankGroups {
        &self.rank_groups
    }

    pub fn flush_suit(&self) -> Option<Suit> {
        self.flush_suit
    }

    pub fn suited(&self, suit: Suit) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.suit() == suit).collect()
    }

    pub fn of_rank(&self, rank: Rank) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.rank() == rank)
    }

    /// The `n` highest cards of distinct ranks outside `exclude`.
    pub fn kickers(&self, exclude: &[Rank], n: usize) -> Vec<Card> {
        let mut out: Vec<Card> = Vec::with_capacity(n);
        for &card in &self.cards {
            if out.len() == n {
                break;
            }
            if exclude.contains(&card.rank()) || out.iter().any(|k| k.rank() == card.rank()) {
                continue;
            }
            out.push(card);
        }
        out
    }
}
