//! A single-player blackjack engine with a multi-deck shoe and a persistent
//! bankroll.
//!
//! The crate provides a [`Table`] that owns the [`Shoe`] and the player's
//! [`SessionState`], and hands out one [`Round`] at a time. A round is an
//! explicit state machine (betting, initial deal, player turn, dealer turn,
//! settle) driven by discrete calls, so it can be played from a terminal or
//! from a scripted test alike.
//!
//! # Example
//!
//! ```
//! use shoebox::{Action, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42).unwrap();
//! let result = table
//!     .play_round(10, |view, _| {
//!         if view.player_value < 17 { Action::Hit } else { Action::Stand }
//!     })
//!     .unwrap();
//! assert_eq!(table.session().hands_played(), 1);
//! # let _ = result;
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod session;
pub mod shoe;
pub mod snapshot;
pub mod store;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, ConfigError, DealError, EmptyShoeError, RoundError, ShowdownError,
    StoreError,
};
pub use hand::{Hand, best_total};
pub use options::TableOptions;
pub use result::{Outcome, RoundResult};
pub use round::{Action, Round, RoundState};
pub use session::SessionState;
pub use shoe::Shoe;
pub use snapshot::{CountAdvice, TableSnapshot};
pub use store::{JsonFileStore, LoadedSession, MemoryStore, SessionStore, load_or_default};
pub use table::Table;
