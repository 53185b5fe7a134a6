use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::evaluator::{Classification, EvalError};
use crate::hand::{Hand, HandError};
use crate::history::{ActionKind, ActionReport};
use crate::player::{Player, PlayerError, PlayerId, PlayerStatus};
use crate::pot::{Pot, PotError};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::fmt;

/// Players needed to deal a hand or open a betting stage.
pub const MIN_PLAYERS: usize = 2;

/// Positive table identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(u32);

impl TableId {
    pub fn new(id: u32) -> Result<Self, TableError> {
        if id == 0 {
            return Err(TableError::InvalidTableId);
        }
        Ok(Self(id))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TableStatus {
    Waiting,
    Active,
    Finished,
}

/// The last betting stage opened in the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    NotStarted,
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Stage {
    pub const fn street(self) -> Option<Street> {
        match self {
            Stage::NotStarted => None,
            Stage::PreFlop => Some(Street::PreFlop),
            Stage::Flop => Some(Street::Flop),
            Stage::Turn => Some(Street::Turn),
            Stage::River => Some(Street::River),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.street() {
            Some(street) => fmt::Display::fmt(&street, f),
            None => f.write_str("not started"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Community cards dealt when the street opens.
    pub const fn community_cards(self) -> usize {
        match self {
            Street::PreFlop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Street::PreFlop => "pre-flop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }

    const fn stage(self) -> Stage {
        match self {
            Street::PreFlop => Stage::PreFlop,
            Street::Flop => Stage::Flop,
            Street::Turn => Stage::Turn,
            Street::River => Stage::River,
        }
    }

    const fn required_stage(self) -> Stage {
        match self {
            Street::PreFlop => Stage::NotStarted,
            Street::Flop => Stage::PreFlop,
            Street::Turn => Stage::Flop,
            Street::River => Stage::Turn,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse classification of [`TableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input from the caller.
    Validation,
    /// Operation called in the wrong order.
    Sequencing,
    /// Table state disagrees with the request.
    Consistency,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("table id must be positive")]
    InvalidTableId,
    #[error("blind must be at least 2, got {0}")]
    InvalidBlind(u64),
    #[error("table needs at least 2 seats, got {0}")]
    InvalidSeats(usize),
    #[error("need at least {required} players in the hand, found {found}")]
    NotEnoughPlayers { required: usize, found: usize },
    #[error("table is full ({0} seats)")]
    TableFull(usize),
    #[error("player {0} is already seated")]
    DuplicatePlayer(PlayerId),
    #[error("player {0} is not seated")]
    UnknownPlayer(PlayerId),
    #[error("wager must not be negative, got {0}")]
    NegativeWager(i64),
    #[error("no player is due to act")]
    NoCurrentActor,
    #[error("deck ran out of cards")]
    DeckExhausted,
    #[error("a hand is in progress")]
    HandInProgress,
    #[error("no hand is in progress")]
    NoHandInProgress,
    #[error("{0} has already been dealt")]
    StageRepeated(Street),
    #[error("cannot open the {street} at stage {stage}")]
    StageOutOfOrder { street: Street, stage: Stage },
    #[error("betting round still has a player to act")]
    RoundInProgress,
    #[error("showdown needs at least 3 community cards, {0} dealt")]
    BoardIncomplete(usize),
    #[error("table status cannot move from {from:?} to {to:?}")]
    StatusTransition { from: TableStatus, to: TableStatus },
    #[error("table is finished")]
    TableFinished,
    #[error("player {player} has wagered {wagered} of {to_match} this round")]
    UnsettledBets { player: PlayerId, wagered: u64, to_match: u64 },
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Pot(#[from] PotError),
    #[error(transparent)]
    Hand(#[from] HandError),
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::InvalidTableId
            | TableError::InvalidBlind(_)
            | TableError::InvalidSeats(_)
            | TableError::NotEnoughPlayers { .. }
            | TableError::TableFull(_)
            | TableError::DuplicatePlayer(_)
            | TableError::UnknownPlayer(_)
            | TableError::NegativeWager(_)
            | TableError::NoCurrentActor
            | TableError::DeckExhausted
            | TableError::Player(_) => ErrorKind::Validation,
            TableError::HandInProgress
            | TableError::NoHandInProgress
            | TableError::StageRepeated(_)
            | TableError::StageOutOfOrder { .. }
            | TableError::RoundInProgress
            | TableError::BoardIncomplete(_)
            | TableError::StatusTransition { .. }
            | TableError::TableFinished
            | TableError::Pot(PotError::Closed(_)) => ErrorKind::Sequencing,
            TableError::UnsettledBets { .. }
            | TableError::Pot(_)
            | TableError::Hand(HandError::Eval(EvalError::DuplicateCards)) => {
                ErrorKind::Consistency
            }
            TableError::Hand(_) => ErrorKind::Validation,
        }
    }
}

/// A single poker table: seats, the deck, the pot and the betting state
/// for one hand at a time.
///
/// Seating order lives in a ring that is rotated in place: the player at
/// the front leads. Players are always addressed by id.
///
/// ```
/// use holdem_table::config::TableConfig;
/// use holdem_table::table::{Stage, Table};
///
/// let mut table = Table::new(1, TableConfig::default().with_seed(3)).unwrap();
/// table.join(1, "Alice").unwrap();
/// table.join(2, "Bob").unwrap();
///
/// let blinds = table.start_hand().unwrap();
/// assert_eq!(blinds.len(), 2);
/// assert_eq!(table.pot_total(), 30);
/// assert_eq!(table.stage(), Stage::PreFlop);
///
/// while table.next_actor() {
///     let to_call = table.to_call().unwrap();
///     table.wager(to_call as i64).unwrap();
/// }
/// assert!(table.open_flop().unwrap());
/// assert_eq!(table.community().len(), 3);
/// ```
#[derive(Debug)]
pub struct Table {
    id: TableId,
    config: TableConfig,
    status: TableStatus,
    players: VecDeque<Player>,
    deck: Deck,
    rng: ChaCha8Rng,
    community: Vec<Card>,
    pot: Pot,
    bet_to_match: u64,
    small_blind: Option<PlayerId>,
    under_the_gun: Option<PlayerId>,
    current: Option<PlayerId>,
    stage: Stage,
    history: Vec<ActionReport>,
    hand_number: u32,
}

impl Table {
    pub fn new(id: u32, config: TableConfig) -> Result<Self, TableError> {
        let id = TableId::new(id)?;
        validate_blind(config.blind)?;
        if config.max_seats < MIN_PLAYERS {
            return Err(TableError::InvalidSeats(config.max_seats));
        }
        let seed: u64 = match config.seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut rng);

        Ok(Self {
            id,
            config,
            status: TableStatus::Waiting,
            players: VecDeque::new(),
            deck,
            rng,
            community: Vec::new(),
            pot: Pot::new(0),
            bet_to_match: 0,
            small_blind: None,
            under_the_gun: None,
            current: None,
            stage: Stage::NotStarted,
            history: Vec::new(),
            hand_number: 0,
        })
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Big blind for the next hand.
    pub fn blind(&self) -> u64 {
        self.config.blind
    }

    /// Players in seating order, leader first.
    pub fn players(&self) -> impl ExactSizeIterator<Item = &Player> + '_ {
        self.players.iter()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    pub fn pot_total(&self) -> u64 {
        self.pot.total()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Round wager every acting player has to reach.
    pub fn bet_to_match(&self) -> u64 {
        self.bet_to_match
    }

    pub fn current_actor(&self) -> Option<PlayerId> {
        self.current
    }

    pub fn small_blind(&self) -> Option<PlayerId> {
        self.small_blind
    }

    pub fn under_the_gun(&self) -> Option<PlayerId> {
        self.under_the_gun
    }

    /// Wagering actions of the current (or last) hand, in order.
    pub fn history(&self) -> &[ActionReport] {
        &self.history
    }

    /// Hands dealt at this table so far.
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    /// Chips the current actor needs to add to match the bet.
    pub fn to_call(&self) -> Option<u64> {
        let player = self.player(self.current?)?;
        Some(self.bet_to_match.saturating_sub(player.round_wagered))
    }

    /// Seat a new player with the configured starting stack.
    pub fn join(&mut self, id: u32, name: &str) -> Result<PlayerId, TableError> {
        let player = Player::new(id, name, self.config.starting_stack)?;
        self.seat(player)
    }

    /// Seat a player. Only allowed between hands.
    pub fn seat(&mut self, player: Player) -> Result<PlayerId, TableError> {
        if self.status == TableStatus::Finished {
            return Err(TableError::TableFinished);
        }
        if self.stage != Stage::NotStarted {
            return Err(TableError::HandInProgress);
        }
        if self.players.len() >= self.config.max_seats {
            return Err(TableError::TableFull(self.config.max_seats));
        }
        if self.player(player.id).is_some() {
            return Err(TableError::DuplicatePlayer(player.id));
        }
        let id = player.id;
        debug!("table {}: seating player {} ({})", self.id, id, player.name);
        self.players.push_back(player);
        Ok(id)
    }

    pub fn set_blind(&mut self, blind: u64) -> Result<(), TableError> {
        if self.stage != Stage::NotStarted {
            return Err(TableError::HandInProgress);
        }
        validate_blind(blind)?;
        self.config.blind = blind;
        Ok(())
    }

    /// Move the status forward. Waiting -> Active -> Finished only.
    pub fn set_status(&mut self, status: TableStatus) -> Result<(), TableError> {
        if status <= self.status {
            return Err(TableError::StatusTransition { from: self.status, to: status });
        }
        info!("table {}: {:?} -> {:?}", self.id, self.status, status);
        self.status = status;
        Ok(())
    }

    /// Deal hole cards, move the blinds and collect them.
    ///
    /// Returns the reports for the two blind postings. The current actor is
    /// left unset; call [`Table::next_actor`] to begin the round.
    pub fn start_hand(&mut self) -> Result<Vec<ActionReport>, TableError> {
        if self.status == TableStatus::Finished {
            return Err(TableError::TableFinished);
        }
        if self.stage != Stage::NotStarted {
            return Err(TableError::StageRepeated(Street::PreFlop));
        }
        let found = self.count(Player::in_hand);
        if found < MIN_PLAYERS {
            return Err(TableError::NotEnoughPlayers { required: MIN_PLAYERS, found });
        }
        if self.deck.len() < 2 * found {
            return Err(TableError::DeckExhausted);
        }
        if self.status == TableStatus::Waiting {
            self.set_status(TableStatus::Active)?;
        }

        self.hand_number += 1;
        self.pot = Pot::new(self.hand_number);
        self.history.clear();
        self.community.clear();
        self.current = None;
        for player in self.players.iter_mut().filter(|p| p.in_hand()) {
            player.start_hand();
        }
        self.deal_hole_cards()?;

        if let Some(previous) = self.small_blind {
            self.rotate_to(previous);
            self.players.rotate_left(1);
        }
        let seats = self.in_hand_ids();
        let (small_blind, big_blind) = match seats.as_slice() {
            [sb, bb, ..] => (*sb, *bb),
            _ => return Err(TableError::NotEnoughPlayers { required: MIN_PLAYERS, found: seats.len() }),
        };
        self.small_blind = Some(small_blind);
        info!(
            "table {}: hand {} starts with {} players, small blind {}",
            self.id,
            self.hand_number,
            seats.len(),
            small_blind
        );

        let blind = self.config.blind;
        let reports = vec![
            self.place_wager(small_blind, blind / 2, Some(ActionKind::SmallBlind))?,
            self.place_wager(big_blind, blind, Some(ActionKind::BigBlind))?,
        ];
        self.bet_to_match = blind;

        let under_the_gun = if seats.len() > 2 { seats[2] } else { seats[0] };
        self.under_the_gun = Some(under_the_gun);
        self.rotate_to(under_the_gun);
        self.stage = Stage::PreFlop;
        Ok(reports)
    }

    /// Point the current actor at the next player who can still wager.
    ///
    /// With no current actor the first such player in seating order is
    /// chosen. Returns `false` and clears the pointer once the lap is over.
    pub fn next_actor(&mut self) -> bool {
        if self.stage == Stage::NotStarted {
            self.current = None;
            return false;
        }
        let start = match self.current {
            None => 0,
            Some(id) => self.position(id).map_or(self.players.len(), |pos| pos + 1),
        };
        self.current = self.players.iter().skip(start).find(|p| p.can_act()).map(|p| p.id);
        match self.current {
            Some(id) => debug!("table {}: player {} to act", self.id, id),
            None => debug!("table {}: no more players to act", self.id),
        }
        self.current.is_some()
    }

    /// Wager `amount` chips for the current actor.
    ///
    /// A zero wager short of the bet folds, a zero wager that already
    /// matches checks, a wager past the bet raises and anything else calls.
    pub fn wager(&mut self, amount: i64) -> Result<ActionReport, TableError> {
        let amount = u64::try_from(amount).map_err(|_| TableError::NegativeWager(amount))?;
        let id = self.current.ok_or(TableError::NoCurrentActor)?;
        self.place_wager(id, amount, None)
    }

    pub fn open_flop(&mut self) -> Result<bool, TableError> {
        self.open_street(Street::Flop)
    }

    pub fn open_turn(&mut self) -> Result<bool, TableError> {
        self.open_street(Street::Turn)
    }

    pub fn open_river(&mut self) -> Result<bool, TableError> {
        self.open_street(Street::River)
    }

    /// The only player left in the hand, once everyone else has folded or
    /// been eliminated.
    pub fn uncontested(&self) -> Option<PlayerId> {
        if self.stage == Stage::NotStarted {
            return None;
        }
        match self.in_hand_ids().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Classify every live hand against the board, best first. Equal scores
    /// keep seating order.
    ///
    /// A hand stopped before the flop has nothing to classify: use
    /// [`Table::uncontested`] to find the winner instead.
    pub fn showdown(&mut self) -> Result<Vec<(PlayerId, Classification)>, TableError> {
        if self.stage == Stage::NotStarted {
            return Err(TableError::NoHandInProgress);
        }
        if self.community.len() < Street::Flop.community_cards() {
            return Err(TableError::BoardIncomplete(self.community.len()));
        }
        let mut results = Vec::new();
        for player in self.players.iter_mut().filter(|p| p.in_hand()) {
            let id = player.id;
            if let Some(hand) = player.hand_mut() {
                let classification = hand.classify(&self.community)?.clone();
                results.push((id, classification));
            }
        }
        results.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some((id, best)) = results.first() {
            info!("table {}: showdown led by player {} with {}", self.id, id, best);
        }
        Ok(results)
    }

    /// Pay `chips` from the pot to a player.
    pub fn award(&mut self, id: PlayerId, chips: u64) -> Result<(), TableError> {
        if self.player(id).is_none() {
            return Err(TableError::UnknownPlayer(id));
        }
        let paid = self.pot.pay_out(chips)?;
        if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
            player.add_chips(paid);
        }
        info!("table {}: player {} wins {}", self.id, id, paid);
        Ok(())
    }

    /// Close the pot and reset for the next hand. Players without chips are
    /// eliminated; the table finishes when fewer than two remain.
    pub fn end_hand(&mut self) -> Result<(), TableError> {
        if self.stage == Stage::NotStarted {
            return Err(TableError::NoHandInProgress);
        }
        if self.pot.remaining() > 0 {
            warn!(
                "table {}: hand {} closed with {} chips unawarded",
                self.id,
                self.hand_number,
                self.pot.remaining()
            );
        }
        self.pot.close();
        for player in self.players.iter_mut() {
            player.end_hand();
        }
        self.community.clear();
        self.bet_to_match = 0;
        self.current = None;
        self.under_the_gun = None;
        self.stage = Stage::NotStarted;
        self.deck = Deck::standard();
        self.deck.shuffle_with(&mut self.rng);

        let remaining = self.count(|p| p.status != PlayerStatus::Eliminated);
        info!("table {}: hand {} over, {} players remain", self.id, self.hand_number, remaining);
        if remaining < MIN_PLAYERS {
            self.set_status(TableStatus::Finished)?;
        }
        Ok(())
    }

    fn open_street(&mut self, street: Street) -> Result<bool, TableError> {
        let target = street.stage();
        if self.stage >= target {
            return Err(TableError::StageRepeated(street));
        }
        if self.stage != street.required_stage() {
            return Err(TableError::StageOutOfOrder { street, stage: self.stage });
        }
        if self.current.is_some() {
            return Err(TableError::RoundInProgress);
        }
        if self.count(Player::in_hand) < MIN_PLAYERS {
            debug!("table {}: too few players left to open the {}", self.id, street);
            return Ok(false);
        }
        if let Some(p) = self
            .players
            .iter()
            .find(|p| p.can_act() && p.round_wagered != self.bet_to_match)
        {
            return Err(TableError::UnsettledBets {
                player: p.id,
                wagered: p.round_wagered,
                to_match: self.bet_to_match,
            });
        }
        let count = street.community_cards();
        if self.deck.len() < count + 1 {
            return Err(TableError::DeckExhausted);
        }

        for player in self.players.iter_mut().filter(|p| p.in_hand()) {
            player.start_round();
        }
        if let Some(small_blind) = self.small_blind {
            self.rotate_to(small_blind);
        }
        self.deck.burn();
        let dealt = self.deck.deal_n(count);
        self.community.extend_from_slice(&dealt);
        self.bet_to_match = 0;
        self.stage = target;
        info!(
            "table {}: {} opened, board {}",
            self.id,
            street,
            self.community.iter().map(|c| c.id()).collect::<Vec<_>>().join(" ")
        );
        Ok(true)
    }

    fn place_wager(
        &mut self,
        id: PlayerId,
        amount: u64,
        blind: Option<ActionKind>,
    ) -> Result<ActionReport, TableError> {
        let street = self.stage.street().unwrap_or(Street::PreFlop);
        let bet_to_match = self.bet_to_match;
        let player =
            self.players.iter_mut().find(|p| p.id == id).ok_or(TableError::UnknownPlayer(id))?;

        let chips = player.wager(amount);
        let round_total = player.round_wagered;
        let kind = match blind {
            Some(kind) => kind,
            None if chips == 0 && round_total < bet_to_match => {
                player.fold();
                ActionKind::Fold
            }
            None if chips == 0 => ActionKind::Check,
            None if round_total > bet_to_match => ActionKind::Raise,
            None => ActionKind::Call,
        };
        let report = ActionReport {
            player: id,
            name: player.name.clone(),
            kind,
            chips,
            round_total,
            street,
            all_in: chips > 0 && player.status == PlayerStatus::AllIn,
        };

        self.pot.add(id, chips)?;
        if kind == ActionKind::Raise {
            self.bet_to_match = round_total;
            self.rotate_to(id);
        }
        debug!("table {}: {}", self.id, report);
        self.history.push(report.clone());
        Ok(report)
    }

    fn deal_hole_cards(&mut self) -> Result<(), TableError> {
        let mut firsts = Vec::with_capacity(self.players.len());
        for _ in self.players.iter().filter(|p| p.in_hand()) {
            firsts.push(self.deck.deal().ok_or(TableError::DeckExhausted)?);
        }
        for (player, first) in self.players.iter_mut().filter(|p| p.in_hand()).zip(firsts) {
            let second = self.deck.deal().ok_or(TableError::DeckExhausted)?;
            player.receive(Hand::try_new(first, second)?);
        }
        Ok(())
    }

    fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Rotate the ring so `id` leads.
    fn rotate_to(&mut self, id: PlayerId) {
        if let Some(pos) = self.position(id) {
            self.players.rotate_left(pos);
            debug!("table {}: player {} now leads", self.id, id);
        }
    }

    fn in_hand_ids(&self) -> Vec<PlayerId> {
        self.players.iter().filter(|p| p.in_hand()).map(|p| p.id).collect()
    }

    fn count(&self, pred: impl Fn(&Player) -> bool) -> usize {
        self.players.iter().filter(|&p| pred(p)).count()
    }
}

fn validate_blind(blind: u64) -> Result<(), TableError> {
    if blind < 2 {
        return Err(TableError::InvalidBlind(blind));
    }
    Ok(())
}
