use crate::player::PlayerId;
use std::collections::BTreeMap;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PotError {
    #[error("pot {0} is closed")]
    Closed(u32),
    #[error("pot holds {available} chips, cannot pay out {requested}")]
    Insufficient { available: u64, requested: u64 },
}

/// A single undivided pot: chips contributed per player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pot {
    id: u32,
    closed: bool,
    contributions: BTreeMap<PlayerId, u64>,
    paid_out: u64,
}

impl Pot {
    pub fn new(id: u32) -> Self {
        Self { id, ..Self::default() }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Everything ever contributed to this pot.
    pub fn total(&self) -> u64 {
        self.contributions.values().sum()
    }

    /// Chips not yet paid out.
    pub fn remaining(&self) -> u64 {
        self.total() - self.paid_out
    }

    pub fn contribution(&self, player: PlayerId) -> u64 {
        self.contributions.get(&player).copied().unwrap_or(0)
    }

    pub fn contributions(&self) -> impl Iterator<Item = (PlayerId, u64)> + '_ {
        self.contributions.iter().map(|(&id, &chips)| (id, chips))
    }

    pub fn add(&mut self, player: PlayerId, chips: u64) -> Result<(), PotError> {
        if self.closed {
            return Err(PotError::Closed(self.id));
        }
        if chips > 0 {
            *self.contributions.entry(player).or_insert(0) += chips;
        }
        Ok(())
    }

    /// Take `chips` out of an open pot for a winner.
    pub fn pay_out(&mut self, chips: u64) -> Result<u64, PotError> {
        if self.closed {
            return Err(PotError::Closed(self.id));
        }
        let available = self.remaining();
        if chips > available {
            return Err(PotError::Insufficient { available, requested: chips });
        }
        self.paid_out += chips;
        Ok(chips)
    }

    pub fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(id: u32) -> PlayerId {
        PlayerId::new(id).expect("positive id")
    }

    #[test]
    fn contributions_accumulate_per_player() {
        let mut pot = Pot::new(1);
        pot.add(pid(1), 10).unwrap();
        pot.add(pid(2), 20).unwrap();
        pot.add(pid(1), 5).unwrap();
        pot.add(pid(3), 0).unwrap();
        assert_eq!(pot.total(), 35);
        assert_eq!(pot.contribution(pid(1)), 15);
        assert_eq!(pot.contribution(pid(3)), 0);
        assert_eq!(pot.contributions().count(), 2);
    }

    #[test]
    fn closed_pot_rejects_chips() {
        let mut pot = Pot::new(4);
        pot.add(pid(1), 10).unwrap();
        pot.close();
        assert_eq!(pot.add(pid(1), 10), Err(PotError::Closed(4)));
        assert_eq!(pot.pay_out(5), Err(PotError::Closed(4)));
        assert_eq!(pot.total(), 10);
    }

    #[test]
    fn pay_out_cannot_exceed_remaining() {
        let mut pot = Pot::new(1);
        pot.add(pid(1), 30).unwrap();
        assert_eq!(pot.pay_out(20), Ok(20));
        assert_eq!(pot.remaining(), 10);
        assert_eq!(pot.pay_out(11), Err(PotError::Insufficient { available: 10, requested: 11 }));
        assert_eq!(pot.total(), 30);
    }
}
