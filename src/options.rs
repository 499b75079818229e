//! Table configuration options.

use crate::error::ConfigError;

/// Default number of decks in the shoe.
pub const DEFAULT_DECKS: u8 = 6;
/// Default fraction of the shoe left when it gets reshuffled.
pub const DEFAULT_RESHUFFLE_THRESHOLD: f64 = 0.25;
/// Default bankroll for a new player.
pub const DEFAULT_STARTING_BALANCE: usize = 1000;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoebox::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_reshuffle_threshold(0.5)
///     .with_starting_balance(250);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks.
    pub decks: u8,
    /// Fraction of the shoe remaining below which it is reshuffled between rounds.
    pub reshuffle_threshold: f64,
    /// Balance given to a player with no saved session.
    pub starting_balance: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            starting_balance: DEFAULT_STARTING_BALANCE,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_threshold(0.4);
    /// assert_eq!(options.reshuffle_threshold, 0.4);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: f64) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the starting balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Checks the options.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no decks or the threshold is outside `[0, 1)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if !(0.0..1.0).contains(&self.reshuffle_threshold) {
            return Err(ConfigError::InvalidReshuffleThreshold);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_six_decks_and_a_quarter() {
        let options = TableOptions::default();
        assert_eq!(options.decks, 6);
        assert!((options.reshuffle_threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(options.starting_balance, 1000);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert_eq!(
            TableOptions::default().with_decks(0).validate(),
            Err(ConfigError::NoDecks)
        );
        assert_eq!(
            TableOptions::default()
                .with_reshuffle_threshold(1.0)
                .validate(),
            Err(ConfigError::InvalidReshuffleThreshold)
        );
        assert_eq!(
            TableOptions::default()
                .with_reshuffle_threshold(f64::NAN)
                .validate(),
            Err(ConfigError::InvalidReshuffleThreshold)
        );
    }
}
