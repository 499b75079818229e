//! The multi-deck shoe cards are dealt from.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{info, trace};

use crate::card::{Card, DECK_SIZE, standard_decks};
use crate::error::{ConfigError, EmptyShoeError};
use crate::options::{DEFAULT_RESHUFFLE_THRESHOLD, TableOptions};

/// A shuffled pool of one or more decks.
///
/// Cards are dealt until the remaining fraction falls below the reshuffle
/// threshold; the shoe is then rebuilt from fresh decks rather than by
/// gathering the discards. The shoe also keeps a Hi-Lo running count over the
/// cards dealt since the last shuffle.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Undealt cards; the next card to deal is at the end.
    cards: Vec<Card>,
    decks: u8,
    threshold: f64,
    running_count: i32,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `num_decks` decks seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDecks`] if `num_decks` is zero.
    pub fn new(num_decks: u8) -> Result<Self, ConfigError> {
        Self::with_seed(num_decks, rand::random())
    }

    /// Creates a shuffled shoe whose shuffles are reproducible from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDecks`] if `num_decks` is zero.
    pub fn with_seed(num_decks: u8, seed: u64) -> Result<Self, ConfigError> {
        if num_decks == 0 {
            return Err(ConfigError::NoDecks);
        }

        let mut shoe = Self {
            cards: Vec::new(),
            decks: num_decks,
            threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            running_count: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reshuffle();
        Ok(shoe)
    }

    /// Creates a shoe from table options.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not validate.
    pub fn from_options(options: &TableOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;
        let mut shoe = Self::with_seed(options.decks, seed)?;
        shoe.threshold = options.reshuffle_threshold;
        Ok(shoe)
    }

    /// Creates a shoe that deals exactly `draws`, first element first.
    ///
    /// The capacity is still `num_decks` full decks, so a short stack reports
    /// that it needs reshuffling. Reshuffling replaces the stack with fresh
    /// shuffled decks.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDecks`] if `num_decks` is zero.
    pub fn stacked(num_decks: u8, draws: &[Card]) -> Result<Self, ConfigError> {
        let mut shoe = Self::with_seed(num_decks, 0)?;
        shoe.cards = draws.iter().rev().copied().collect();
        Ok(shoe)
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        let card = self.cards.pop().ok_or(EmptyShoeError)?;
        self.running_count += card.rank.hi_lo();
        trace!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Returns whether the remaining fraction is below the reshuffle threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let remaining_ratio = self.remaining_count() as f64 / self.total_capacity() as f64;

        remaining_ratio < self.threshold
    }

    /// Discards every remaining card and deals from fresh shuffled decks.
    pub fn reshuffle(&mut self) {
        self.cards = standard_decks(self.decks);
        self.cards.shuffle(&mut self.rng);
        self.running_count = 0;
        info!(decks = self.decks, cards = self.cards.len(), "shoe reshuffled");
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub const fn total_capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub fn dealt_count(&self) -> usize {
        self.total_capacity().saturating_sub(self.remaining_count())
    }

    /// Returns the percentage of the shoe already dealt.
    #[must_use]
    pub fn percent_used(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used = self.dealt_count() as f64 / self.total_capacity() as f64;
        used * 100.0
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the reshuffle threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the Hi-Lo running count since the last shuffle.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns the running count per remaining deck, or 0 for an empty shoe.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let remaining_decks = self.cards.len() as f64 / DECK_SIZE as f64;
        f64::from(self.running_count) / remaining_decks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn zero_decks_is_a_config_error() {
        assert_eq!(Shoe::new(0).unwrap_err(), ConfigError::NoDecks);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Shoe::with_seed(2, 9).unwrap();
        let mut b = Shoe::with_seed(2, 9).unwrap();
        for _ in 0..20 {
            assert_eq!(a.draw().unwrap(), b.draw().unwrap());
        }
    }

    #[test]
    fn stacked_deals_in_order() {
        let draws = [
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::King, Suit::Clubs),
        ];
        let mut shoe = Shoe::stacked(1, &draws).unwrap();
        assert_eq!(shoe.draw().unwrap(), draws[0]);
        assert_eq!(shoe.draw().unwrap(), draws[1]);
        assert_eq!(shoe.draw().unwrap_err(), EmptyShoeError);
        assert_eq!(shoe.running_count(), 0);
    }

    #[test]
    fn true_count_scales_by_remaining_decks() {
        let low = Card::new(Rank::Five, Suit::Spades);
        let mut draws = vec![low; 2];
        draws.extend(vec![Card::new(Rank::Eight, Suit::Spades); 26]);
        let mut shoe = Shoe::stacked(1, &draws).unwrap();
        shoe.draw().unwrap();
        shoe.draw().unwrap();
        assert_eq!(shoe.running_count(), 2);
        assert!((shoe.true_count() - 4.0).abs() < 1e-9);
    }
}
