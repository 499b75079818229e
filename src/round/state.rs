//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the bet.
    Betting,
    /// Bet accepted; cards not dealt yet.
    InitialDeal,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and the round can be settled.
    Settle,
    /// Round has been settled.
    Done,
}

/// A player decision during [`RoundState::PlayerTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Take one more card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, take exactly one card, and end the turn.
    DoubleDown,
}
