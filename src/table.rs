//! The table: one shoe and one player session across many rounds.

use tracing::{debug, info};

use crate::error::{ActionError, ConfigError, RoundError};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::round::{Action, Round, RoundState};
use crate::session::SessionState;
use crate::shoe::Shoe;
use crate::snapshot::TableSnapshot;

/// A blackjack table that owns the shoe and the player's session.
///
/// Rounds are handed out by [`Table::next_round`], which performs the
/// reshuffle check first. While a [`Round`] is alive it holds the only mutable
/// borrow of the table, so the shoe can never be reshuffled mid-round.
#[derive(Debug, Clone)]
pub struct Table {
    options: TableOptions,
    shoe: Shoe,
    session: SessionState,
}

impl Table {
    /// Creates a table with a fresh session and a shoe shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42).unwrap();
    /// assert_eq!(table.session().balance(), 1000);
    /// assert_eq!(table.shoe().remaining_count(), 312);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not validate.
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        let shoe = Shoe::from_options(&options, seed)?;
        let session = SessionState::new(options.starting_balance);
        Ok(Self {
            options,
            shoe,
            session,
        })
    }

    /// Assembles a table from an existing shoe and session.
    #[must_use]
    pub const fn from_parts(options: TableOptions, shoe: Shoe, session: SessionState) -> Self {
        Self {
            options,
            shoe,
            session,
        }
    }

    /// Replaces the session, e.g. with one loaded from a store.
    #[must_use]
    pub const fn with_session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the player's session.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Consumes the table, returning the session for saving.
    #[must_use]
    pub fn into_session(self) -> SessionState {
        self.session
    }

    /// Returns a snapshot of the table between rounds.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::idle(&self.session, &self.shoe)
    }

    /// Reshuffles the shoe if it has fallen below the threshold.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        if self.shoe.needs_reshuffle() {
            info!(
                remaining = self.shoe.remaining_count(),
                capacity = self.shoe.total_capacity(),
                "reshuffle threshold reached"
            );
            self.shoe.reshuffle();
            true
        } else {
            false
        }
    }

    /// Runs the reshuffle check and starts the next round.
    pub fn next_round(&mut self) -> Round<'_> {
        self.check_and_reshuffle();
        Round::new(&mut self.shoe, &mut self.session)
    }

    /// Plays a whole round headlessly.
    ///
    /// `decide` is asked for an action every time the player is to act. After
    /// a rejected action it is asked again for the same turn, with the
    /// rejection passed in; a dealt round always reaches settlement unless the
    /// shoe runs dry.
    ///
    /// # Errors
    ///
    /// Returns a rejected bet before anything is dealt, or an error that
    /// leaves the round unable to finish. A rejected bet does not touch the
    /// session.
    pub fn play_round<F>(&mut self, bet: usize, mut decide: F) -> Result<RoundResult, RoundError>
    where
        F: FnMut(&TableSnapshot, Option<ActionError>) -> Action,
    {
        let mut round = self.next_round();
        round.place_bet(bet)?;
        round.deal()?;

        let mut rejected = None;
        while round.state() == RoundState::PlayerTurn {
            let action = decide(&round.snapshot(), rejected.take());
            match round.act(action) {
                Ok(_) => {}
                Err(err) if RoundError::from(err).is_recoverable() => {
                    debug!(?action, error = %err, "action rejected, asking again");
                    rejected = Some(err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(round.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BetError;

    #[test]
    fn zero_decks_rejected() {
        let err = Table::new(TableOptions::default().with_decks(0), 1).unwrap_err();
        assert_eq!(err, ConfigError::NoDecks);
    }

    #[test]
    fn rejected_bet_leaves_session_untouched() {
        let mut table = Table::new(TableOptions::default(), 3).unwrap();
        let before = *table.session();
        let remaining = table.shoe().remaining_count();

        let err = table.play_round(5000, |_, _| Action::Stand).unwrap_err();

        assert_eq!(err, RoundError::Bet(BetError::InsufficientFunds));
        assert_eq!(*table.session(), before);
        assert_eq!(table.shoe().remaining_count(), remaining);
    }
}
