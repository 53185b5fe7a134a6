/// Table settings. Checked by [`crate::table::Table::new`].
///
/// ```
/// use holdem_table::config::TableConfig;
///
/// let config = TableConfig::default().with_blind(50).with_seed(7);
/// assert_eq!(config.blind, 50);
/// assert_eq!(config.starting_stack, 1000);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TableConfig {
    /// Big blind. The small blind is half of it.
    pub blind: u64,
    /// Stack given to players seated through [`crate::table::Table::join`].
    pub starting_stack: u64,
    pub max_seats: usize,
    /// Fixes every shuffle at the table when set.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { blind: 20, starting_stack: 1000, max_seats: 10, seed: None }
    }
}

impl TableConfig {
    pub fn with_blind(mut self, blind: u64) -> Self {
        self.blind = blind;
        self
    }

    pub fn with_starting_stack(mut self, stack: u64) -> Self {
        self.starting_stack = stack;
        self
    }

    pub fn with_max_seats(mut self, seats: usize) -> Self {
        self.max_seats = seats;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
