use tracing::debug;

use crate::error::{BetError, DealError};

use super::{Round, RoundState};

/// Cards needed for the opening deal.
const INITIAL_DEAL_CARDS: usize = 4;

impl Round<'_> {
    /// Places the bet for this round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in betting state, the bet is zero,
    /// or the bet exceeds the balance. Nothing changes on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.session.balance() {
            return Err(BetError::InsufficientFunds);
        }

        self.bet = amount;
        self.state = RoundState::InitialDeal;
        debug!(bet = amount, "bet placed");

        Ok(())
    }

    /// Deals two cards each, alternating, player first.
    ///
    /// A player natural skips straight to [`RoundState::Settle`]; the dealer
    /// keeps the two cards dealt. Otherwise the round moves to
    /// [`RoundState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or fewer than four cards
    /// remain. Nothing is dealt on error.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::InitialDeal {
            return Err(DealError::InvalidState);
        }

        if self.shoe.remaining_count() < INITIAL_DEAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        // Player, dealer up card, player, dealer hole card
        self.player.add_card(self.shoe.draw()?);
        self.dealer.add_card(self.shoe.draw()?);
        self.player.add_card(self.shoe.draw()?);
        self.dealer.add_card(self.shoe.draw()?);

        debug!(
            player = self.player.value(),
            dealer_up = self.dealer.first().map_or(0, |c| c.rank.value()),
            "initial deal"
        );

        if self.player.is_blackjack() {
            self.hole_revealed = true;
            self.state = RoundState::Settle;
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }
}
