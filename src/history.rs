use crate::player::PlayerId;
use crate::table::Street;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionKind {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Raise,
}

/// One wagering action as the table saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ActionReport {
    pub player: PlayerId,
    pub name: String,
    pub kind: ActionKind,
    /// Chips actually moved from the stack into the pot.
    pub chips: u64,
    /// The player's wager for the round after this action.
    pub round_total: u64,
    pub street: Street,
    /// The action emptied the player's stack.
    pub all_in: bool,
}

impl fmt::Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ActionKind::SmallBlind => {
                write!(f, "{} posts small blind of {}", self.name, self.chips)?
            }
            ActionKind::BigBlind => write!(f, "{} posts big blind of {}", self.name, self.chips)?,
            ActionKind::Fold => write!(f, "{} folds", self.name)?,
            ActionKind::Check => write!(f, "{} checks", self.name)?,
            ActionKind::Call => write!(f, "{} calls {}", self.name, self.chips)?,
            ActionKind::Raise => write!(f, "{} raises to {}", self.name, self.round_total)?,
        }
        if self.all_in {
            f.write_str(" and is all-in")?;
        }
        Ok(())
    }
}
