use crate::cards::{Card, Rank};

/// Ranks present in a card pool with their multiplicity, highest rank first.
///
/// Example: A A K K K 9 2 groups as [(Ace, 2), (King, 3), (Nine, 1), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().weight() as usize] += 1;
        }
        let groups = Rank::ALL
            .iter()
            .rev()
            .filter_map(|&rank| {
                let count = counts[rank.weight() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        Self { groups }
    }

    /// Highest rank occurring exactly `count` times.
    pub fn exactly(&self, count: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, c)| *c == count).map(|(rank, _)| *rank)
    }

    /// All ranks occurring exactly `count` times, highest first.
    pub fn all_exactly(&self, count: u8) -> Vec<Rank> {
        self.groups.iter().filter(|(_, c)| *c == count).map(|(rank, _)| *rank).collect()
    }

    /// Highest rank other than `exclude` occurring at least `count` times.
    pub fn at_least_except(&self, count: u8, exclude: Rank) -> Option<Rank> {
        self.groups
            .iter()
            .find(|(rank, c)| *c >= count && *rank != exclude)
            .map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
