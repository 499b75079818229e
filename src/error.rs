//! Error types for table and round operations.

use thiserror::Error;

/// Errors raised by an invalid table or shoe configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe needs at least one deck.
    #[error("the shoe needs at least one deck")]
    NoDecks,
    /// The reshuffle threshold must lie in `[0, 1)`.
    #[error("reshuffle threshold must be at least 0 and below 1")]
    InvalidReshuffleThreshold,
}

/// A draw was attempted on an exhausted shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the shoe")]
pub struct EmptyShoeError;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The round is no longer accepting a bet.
    #[error("invalid round state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bet exceeds the balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Doubling needs exactly two cards in the hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors that can occur during the dealer turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for the dealer or for settling.
    #[error("invalid round state for showdown")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl From<EmptyShoeError> for DealError {
    fn from(_: EmptyShoeError) -> Self {
        Self::NotEnoughCards
    }
}

impl From<EmptyShoeError> for ActionError {
    fn from(_: EmptyShoeError) -> Self {
        Self::NoCards
    }
}

impl From<EmptyShoeError> for ShowdownError {
    fn from(_: EmptyShoeError) -> Self {
        Self::NoCards
    }
}

/// Any error raised while driving a whole round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The bet was rejected.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action was rejected.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer turn or settlement failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

impl RoundError {
    /// Returns whether the caller can re-prompt and try again.
    ///
    /// Running out of cards mid-round breaks the reshuffle policy and is not
    /// recoverable; everything else leaves the round untouched.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Deal(DealError::NotEnoughCards)
                | Self::Action(ActionError::NoCards)
                | Self::Showdown(ShowdownError::NoCards)
        )
    }
}

/// Errors raised by a session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No saved session exists yet.
    #[error("no saved session")]
    NotFound,
    /// Reading or writing the save file failed.
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The save record could not be encoded or decoded.
    #[error("save file is malformed: {0}")]
    Format(#[from] serde_json::Error),
}
