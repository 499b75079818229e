//! Round engine and state machine.

use tracing::debug;

use crate::hand::Hand;
use crate::result::RoundResult;
use crate::session::SessionState;
use crate::shoe::Shoe;
use crate::snapshot::TableSnapshot;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, RoundState};

/// One betting round against the dealer.
///
/// A round borrows the shoe and the session mutably for its whole lifetime,
/// so the shoe cannot be reshuffled while cards are out. It moves through
/// [`RoundState`] one call at a time:
///
/// ```
/// use shoebox::{Round, RoundState, SessionState, Shoe};
///
/// let mut shoe = Shoe::with_seed(6, 7).unwrap();
/// let mut session = SessionState::default();
///
/// let mut round = Round::new(&mut shoe, &mut session);
/// round.place_bet(10).unwrap();
/// round.deal().unwrap();
/// if round.state() == RoundState::PlayerTurn {
///     round.stand().unwrap();
/// }
/// let result = round.finish().unwrap();
/// assert_eq!(session.hands_played(), 1);
/// # let _ = result;
/// ```
#[derive(Debug)]
pub struct Round<'a> {
    shoe: &'a mut Shoe,
    session: &'a mut SessionState,
    state: RoundState,
    bet: usize,
    doubled: bool,
    player: Hand,
    dealer: Hand,
    /// Whether the dealer's second card is face up.
    hole_revealed: bool,
    result: Option<RoundResult>,
}

impl<'a> Round<'a> {
    /// Starts a round in the betting state.
    pub fn new(shoe: &'a mut Shoe, session: &'a mut SessionState) -> Self {
        debug!(
            balance = session.balance(),
            remaining = shoe.remaining_count(),
            "round started"
        );
        Self {
            shoe,
            session,
            state: RoundState::Betting,
            bet: 0,
            doubled: false,
            player: Hand::new(),
            dealer: Hand::new(),
            hole_revealed: false,
            result: None,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the current bet, doubled if the player doubled down.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the player doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, including the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether the dealer's hole card is face up.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Returns the settled result once the round is done.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Returns a read-only view of the table for display.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(
            self.state,
            self.bet,
            &*self.session,
            &*self.shoe,
            &self.player,
            &self.dealer,
            self.hole_revealed,
        )
    }
}
