//! Read-only views of the table handed to the display layer.

use crate::card::Card;
use crate::hand::{Hand, best_total};
use crate::round::RoundState;
use crate::session::SessionState;
use crate::shoe::Shoe;

/// True count at or beyond which one side is favoured.
const COUNT_EDGE: f64 = 2.0;

/// What the Hi-Lo true count says about the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountAdvice {
    /// True count of +2 or more.
    PlayerAdvantage,
    /// True count of -2 or less.
    DealerAdvantage,
    /// Anything in between.
    Neutral,
}

impl CountAdvice {
    /// Classifies a true count.
    #[must_use]
    pub fn from_true_count(true_count: f64) -> Self {
        if true_count >= COUNT_EDGE {
            Self::PlayerAdvantage
        } else if true_count <= -COUNT_EDGE {
            Self::DealerAdvantage
        } else {
            Self::Neutral
        }
    }
}

/// Everything the display needs after a round transition.
///
/// While the hole card is down only the dealer's up card is listed and
/// counted in [`TableSnapshot::dealer_value`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    /// Current round state.
    pub state: RoundState,
    /// Current bet (0 before betting).
    pub bet: usize,
    /// Player balance.
    pub balance: usize,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The player's total.
    pub player_value: u8,
    /// The dealer's face-up cards.
    pub dealer_cards: Vec<Card>,
    /// Number of dealer cards face down.
    pub dealer_hidden: usize,
    /// Total of the dealer's face-up cards.
    pub dealer_value: u8,
    /// Cards left in the shoe.
    pub shoe_remaining: usize,
    /// Cards in a full shoe.
    pub shoe_capacity: usize,
    /// Hi-Lo running count.
    pub running_count: i32,
    /// Hi-Lo true count.
    pub true_count: f64,
    /// Advice derived from the true count.
    pub advice: CountAdvice,
}

impl TableSnapshot {
    pub(crate) fn capture(
        state: RoundState,
        bet: usize,
        session: &SessionState,
        shoe: &Shoe,
        player: &Hand,
        dealer: &Hand,
        hole_revealed: bool,
    ) -> Self {
        let visible = if hole_revealed {
            dealer.cards()
        } else {
            &dealer.cards()[..dealer.len().min(1)]
        };
        let true_count = shoe.true_count();

        Self {
            state,
            bet,
            balance: session.balance(),
            player_cards: player.cards().to_vec(),
            player_value: player.value(),
            dealer_cards: visible.to_vec(),
            dealer_hidden: dealer.len() - visible.len(),
            dealer_value: best_total(visible),
            shoe_remaining: shoe.remaining_count(),
            shoe_capacity: shoe.total_capacity(),
            running_count: shoe.running_count(),
            true_count,
            advice: CountAdvice::from_true_count(true_count),
        }
    }

    /// Captures the table between rounds, with no cards out.
    #[must_use]
    pub fn idle(session: &SessionState, shoe: &Shoe) -> Self {
        Self::capture(
            RoundState::Betting,
            0,
            session,
            shoe,
            &Hand::new(),
            &Hand::new(),
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_thresholds() {
        assert_eq!(CountAdvice::from_true_count(2.0), CountAdvice::PlayerAdvantage);
        assert_eq!(CountAdvice::from_true_count(1.9), CountAdvice::Neutral);
        assert_eq!(CountAdvice::from_true_count(-2.0), CountAdvice::DealerAdvantage);
        assert_eq!(CountAdvice::from_true_count(0.0), CountAdvice::Neutral);
    }
}
