use tracing::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

/// The dealer draws to this total and stands on anything above it.
const DEALER_HITS_THROUGH: u8 = 16;

impl Round<'_> {
    /// Dealer plays their hand.
    ///
    /// The dealer reveals the hole card and draws while the total is 16 or
    /// less, standing on every 17.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the shoe
    /// runs out while the dealer must draw. Running out aborts the round.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.hole_revealed = true;
        let mut drawn_cards = Vec::new();

        while self.dealer.value() <= DEALER_HITS_THROUGH {
            let card = self.shoe.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            debug!(%card, value = self.dealer.value(), "dealer draws");
        }

        self.state = RoundState::Settle;

        Ok(drawn_cards)
    }

    /// Settles the round and applies the result to the session.
    ///
    /// This is the only place the session is changed, exactly once per round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in settle state.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::Settle {
            return Err(ShowdownError::InvalidState);
        }

        self.hole_revealed = true;

        let outcome = Outcome::decide(&self.player, &self.dealer);
        let net = outcome.net(self.bet);
        self.session.apply_outcome(net, net > 0);

        let result = RoundResult {
            outcome,
            bet: self.bet,
            doubled: self.doubled,
            net,
            player_cards: self.player.cards().to_vec(),
            dealer_cards: self.dealer.cards().to_vec(),
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            balance: self.session.balance(),
        };

        info!(
            outcome = outcome.describe(),
            bet = self.bet,
            net,
            balance = result.balance,
            "round settled"
        );

        self.state = RoundState::Done;
        self.result = Some(result.clone());

        Ok(result)
    }

    /// Plays the dealer if needed, then settles.
    ///
    /// # Errors
    ///
    /// Returns an error if the player turn is not over yet or the dealer runs
    /// out of cards.
    pub fn finish(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state == RoundState::DealerTurn {
            self.dealer_play()?;
        }
        self.settle()
    }
}
