use crate::hand::Hand;
use std::fmt;

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 20;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("player id must be positive")]
    InvalidId,
    #[error("player name must be 1 to 20 characters, got {0:?}")]
    InvalidName(String),
}

/// Positive player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(id: u32) -> Result<Self, PlayerError> {
        if id == 0 {
            return Err(PlayerError::InvalidId);
        }
        Ok(Self(id))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerStatus {
    /// Seated, no hand played yet.
    Waiting,
    Active,
    AllIn,
    Fold,
    /// Out of chips. Never overwritten.
    Eliminated,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) stack: u64,
    pub(crate) hand_wagered: u64,
    pub(crate) round_wagered: u64,
    pub(crate) status: PlayerStatus,
    pub(crate) hand: Option<Hand>,
}

impl Player {
    /// ```
    /// use holdem_table::player::{Player, PlayerStatus};
    ///
    /// let p = Player::new(7, "Alice", 500).unwrap();
    /// assert_eq!(p.status(), PlayerStatus::Waiting);
    /// assert!(Player::new(0, "Bob", 500).is_err());
    /// assert!(Player::new(8, "", 500).is_err());
    /// ```
    pub fn new(id: u32, name: &str, stack: u64) -> Result<Self, PlayerError> {
        let id = PlayerId::new(id)?;
        let len = name.chars().count();
        if len == 0 || len > MAX_NAME_LEN || name.trim().is_empty() {
            return Err(PlayerError::InvalidName(name.to_string()));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            stack,
            hand_wagered: 0,
            round_wagered: 0,
            status: PlayerStatus::Waiting,
            hand: None,
        })
    }

    /// Returns the player's id
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current stack
    pub fn stack(&self) -> u64 {
        self.stack
    }

    /// Chips wagered during the current hand
    pub fn hand_wagered(&self) -> u64 {
        self.hand_wagered
    }

    /// Chips wagered during the current betting round
    pub fn round_wagered(&self) -> u64 {
        self.round_wagered
    }

    /// Returns the player's status
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns the player's hole cards, if dealt
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Still contesting the pot: neither folded nor eliminated.
    pub fn in_hand(&self) -> bool {
        !matches!(self.status, PlayerStatus::Fold | PlayerStatus::Eliminated)
    }

    /// In the hand with chips left to wager.
    pub fn can_act(&self) -> bool {
        self.in_hand() && self.status != PlayerStatus::AllIn
    }

    /// Overwrite the status unless the player is eliminated. Returns whether
    /// the status changed.
    pub fn set_status(&mut self, status: PlayerStatus) -> bool {
        if self.status == PlayerStatus::Eliminated || self.status == status {
            return false;
        }
        self.status = status;
        true
    }

    pub fn add_chips(&mut self, amount: u64) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Move up to `amount` chips from the stack into this round's wager and
    /// return what was actually taken. Emptying the stack puts the player
    /// all-in.
    pub fn wager(&mut self, amount: u64) -> u64 {
        let taken = amount.min(self.stack);
        self.stack -= taken;
        self.round_wagered += taken;
        self.hand_wagered += taken;
        if amount > 0 && self.stack == 0 {
            self.set_status(PlayerStatus::AllIn);
        }
        taken
    }

    /// Discard the hand and leave it. Wager totals are zeroed; chips
    /// already in the pot stay there.
    pub fn fold(&mut self) {
        self.hand = None;
        self.set_status(PlayerStatus::Fold);
        self.round_wagered = 0;
        self.hand_wagered = 0;
    }

    pub(crate) fn receive(&mut self, hand: Hand) {
        self.hand = Some(hand);
    }

    pub(crate) fn hand_mut(&mut self) -> Option<&mut Hand> {
        self.hand.as_mut()
    }

    pub(crate) fn start_hand(&mut self) {
        self.hand = None;
        self.round_wagered = 0;
        self.hand_wagered = 0;
        if self.status == PlayerStatus::Waiting {
            self.status = PlayerStatus::Active;
        }
    }

    pub(crate) fn start_round(&mut self) {
        self.round_wagered = 0;
    }

    /// Players with chips come back active, the rest are eliminated.
    pub(crate) fn end_hand(&mut self) {
        self.hand = None;
        self.round_wagered = 0;
        self.hand_wagered = 0;
        let next =
            if self.stack > 0 { PlayerStatus::Active } else { PlayerStatus::Eliminated };
        self.set_status(next);
    }
}
