//! holdem-table: Texas Hold'em hand classification and table state machine
//!
//! Goals:
//! - Exact, comparable hand scores for Hold'em showdowns
//! - A table that sequences blinds, betting rounds and community cards
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify a Hold'em hand
//! ```
//! use holdem_table::cards::parse_cards;
//! use holdem_table::evaluator::Category;
//! use holdem_table::hand::Hand;
//!
//! let mut hand: Hand = "A;S K;S".parse().unwrap();
//! let board = parse_cards("Q;S J;S 10;S 3;D 7;H").unwrap();
//!
//! let c = hand.classify(&board).unwrap();
//! assert_eq!(c.category, Category::RoyalFlush);
//! assert_eq!(c.score().raw(), 91413121110);
//! ```
//!
//! ## Running a table
//! The table logs through the `log` facade; install any logger to see hand
//! progress.
//! ```
//! use holdem_table::config::TableConfig;
//! use holdem_table::table::Table;
//!
//! let mut table = Table::new(1, TableConfig::default().with_blind(10).with_seed(1)).unwrap();
//! for (id, name) in [(1, "Ann"), (2, "Ben"), (3, "Cid")] {
//!     table.join(id, name).unwrap();
//! }
//! table.start_hand().unwrap();
//! for open in [Table::open_flop, Table::open_turn, Table::open_river] {
//!     while table.next_actor() {
//!         let to_call = table.to_call().unwrap();
//!         table.wager(to_call as i64).unwrap();
//!     }
//!     assert!(open(&mut table).unwrap());
//! }
//! let ranking = table.showdown().unwrap();
//! let (winner, _) = ranking[0].clone();
//! table.award(winner, table.pot().remaining()).unwrap();
//! table.end_hand().unwrap();
//! assert_eq!(table.players().map(|p| p.stack()).sum::<u64>(), 3000);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod history;
pub mod player;
pub mod pot;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
