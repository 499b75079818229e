//! Bankroll and lifetime statistics for one player.

use serde::{Deserialize, Serialize};

use crate::options::DEFAULT_STARTING_BALANCE;

/// Balance and cumulative statistics carried across rounds and sessions.
///
/// The only mutator is [`SessionState::apply_outcome`], called once per
/// settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    balance: usize,
    #[serde(default)]
    hands_played: u64,
    #[serde(default)]
    hands_won: u64,
    #[serde(default)]
    total_winnings: i64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_STARTING_BALANCE)
    }
}

impl SessionState {
    /// Creates a fresh session with the given balance and no history.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            balance,
            hands_played: 0,
            hands_won: 0,
            total_winnings: 0,
        }
    }

    /// Restores a session from saved values.
    ///
    /// `hands_won` is clamped to `hands_played`.
    #[must_use]
    pub fn restore(balance: usize, hands_played: u64, hands_won: u64, total_winnings: i64) -> Self {
        Self {
            balance,
            hands_played,
            hands_won: hands_won.min(hands_played),
            total_winnings,
        }
    }

    /// Records one settled round.
    ///
    /// Adds `net` to the balance and to the lifetime winnings, counts the hand,
    /// and counts a win when `won` is set. The balance saturates at zero;
    /// bets are bounded by the balance so a settled loss never exceeds it.
    pub fn apply_outcome(&mut self, net: isize, won: bool) {
        debug_assert!(
            net >= 0 || net.unsigned_abs() <= self.balance,
            "loss larger than balance"
        );
        self.balance = self.balance.saturating_add_signed(net);
        self.total_winnings = self.total_winnings.saturating_add(net as i64);
        self.hands_played += 1;
        if won {
            self.hands_won += 1;
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the number of settled rounds.
    #[must_use]
    pub const fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Returns the number of rounds that ended with a profit.
    #[must_use]
    pub const fn hands_won(&self) -> u64 {
        self.hands_won
    }

    /// Returns the lifetime net result.
    #[must_use]
    pub const fn total_winnings(&self) -> i64 {
        self.total_winnings
    }

    /// Returns the percentage of rounds won, or 0 before the first round.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.hands_played == 0 {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for hand counts"
        )]
        let rate = self.hands_won as f64 / self.hands_played as f64;
        rate * 100.0
    }

    /// Returns whether the player has nothing left to bet.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.balance == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_has_starting_balance() {
        let session = SessionState::default();
        assert_eq!(session.balance(), 1000);
        assert_eq!(session.hands_played(), 0);
        assert_eq!(session.hands_won(), 0);
        assert_eq!(session.total_winnings(), 0);
        assert!((session.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn apply_outcome_updates_every_field() {
        let mut session = SessionState::new(500);
        session.apply_outcome(150, true);
        session.apply_outcome(-100, false);
        session.apply_outcome(0, false);

        assert_eq!(session.balance(), 550);
        assert_eq!(session.hands_played(), 3);
        assert_eq!(session.hands_won(), 1);
        assert_eq!(session.total_winnings(), 50);
    }

    #[test]
    fn hands_won_never_exceeds_hands_played() {
        let mut session = SessionState::new(1000);
        for net in [10, -10, 0, 25, -5, 15] {
            session.apply_outcome(net, net > 0);
            assert!(session.hands_won() <= session.hands_played());
        }
        assert!((session.win_rate() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn losing_everything_leaves_zero() {
        let mut session = SessionState::new(100);
        session.apply_outcome(-100, false);
        assert_eq!(session.balance(), 0);
        assert!(session.is_broke());
    }

    #[test]
    fn restore_clamps_inconsistent_counts() {
        let session = SessionState::restore(10, 2, 5, -3);
        assert_eq!(session.hands_won(), 2);
    }
}
