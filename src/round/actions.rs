use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;

use super::{Action, Round, RoundState};

impl Round<'_> {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if matches!(self.state, RoundState::PlayerTurn) {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Ends the player turn; the dealer only plays against a live hand.
    fn end_player_turn(&mut self) {
        self.hole_revealed = true;
        self.state = if self.player.is_bust() {
            RoundState::Settle
        } else {
            RoundState::DealerTurn
        };
    }

    /// Applies a player decision.
    ///
    /// Returns the card drawn for [`Action::Hit`] and [`Action::DoubleDown`].
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn act(&mut self, action: Action) -> Result<Option<Card>, ActionError> {
        match action {
            Action::Hit => self.hit().map(Some),
            Action::Stand => self.stand().map(|()| None),
            Action::DoubleDown => self.double_down().map(Some),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the round without the dealer playing.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.shoe.draw()?;
        self.player.add_card(card);
        debug!(%card, value = self.player.value(), "player hits");

        if self.player.is_bust() {
            self.end_player_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(value = self.player.value(), "player stands");
        self.end_player_turn();

        Ok(())
    }

    /// Returns whether [`Round::double_down`] would be accepted now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.check_double().is_ok()
    }

    fn check_double(&self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        // Only on the first two cards
        if self.player.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        if self.bet.saturating_mul(2) > self.session.balance() {
            return Err(ActionError::InsufficientFunds);
        }

        if self.shoe.remaining_count() == 0 {
            return Err(ActionError::NoCards);
        }

        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand does not hold
    /// exactly two cards, twice the bet exceeds the balance, or the shoe is
    /// empty. Nothing changes on error.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.check_double()?;

        let card = self.shoe.draw()?;
        self.bet *= 2;
        self.doubled = true;
        self.player.add_card(card);
        debug!(%card, bet = self.bet, value = self.player.value(), "player doubles down");

        self.end_player_turn();

        Ok(card)
    }
}
