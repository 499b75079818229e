//! Round outcome types and settlement rules.

use crate::card::Card;
use crate::hand::Hand;

/// How a round was decided, in settlement precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; the dealer did not need to play.
    PlayerBust,
    /// Player has a natural and the dealer does not; pays 3:2.
    PlayerBlackjack,
    /// Dealer has a natural and the player does not.
    DealerBlackjack,
    /// Both have naturals; the bet is returned.
    BlackjackPush,
    /// Dealer went over 21.
    DealerBust,
    /// Player's total beats the dealer's.
    PlayerHigher,
    /// Dealer's total beats the player's.
    DealerHigher,
    /// Equal totals; the bet is returned.
    Push,
}

impl Outcome {
    /// Decides the round from the final hands.
    ///
    /// The rules are checked in order: player bust, player natural, dealer
    /// natural, both naturals, dealer bust, then plain totals.
    #[must_use]
    pub fn decide(player: &Hand, dealer: &Hand) -> Self {
        let player_blackjack = player.is_blackjack();
        let dealer_blackjack = dealer.is_blackjack();

        if player.is_bust() {
            Self::PlayerBust
        } else if player_blackjack && !dealer_blackjack {
            Self::PlayerBlackjack
        } else if dealer_blackjack && !player_blackjack {
            Self::DealerBlackjack
        } else if player_blackjack {
            Self::BlackjackPush
        } else if dealer.is_bust() {
            Self::DealerBust
        } else {
            match player.value().cmp(&dealer.value()) {
                core::cmp::Ordering::Greater => Self::PlayerHigher,
                core::cmp::Ordering::Less => Self::DealerHigher,
                core::cmp::Ordering::Equal => Self::Push,
            }
        }
    }

    /// Returns the net change to the balance for a bet of `bet`.
    ///
    /// Naturals pay 3:2 rounded down; other wins pay even money.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "bets fit in isize")]
    pub const fn net(self, bet: usize) -> isize {
        match self {
            Self::PlayerBlackjack => (bet * 3 / 2) as isize,
            Self::DealerBust | Self::PlayerHigher => bet as isize,
            Self::BlackjackPush | Self::Push => 0,
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerHigher => -(bet as isize),
        }
    }

    /// Returns whether the player won money.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerHigher
        )
    }

    /// Returns whether the bet was returned unchanged.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::BlackjackPush | Self::Push)
    }

    /// Returns a short description for display.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::PlayerBust => "player bust",
            Self::PlayerBlackjack => "blackjack",
            Self::DealerBlackjack => "dealer blackjack",
            Self::BlackjackPush => "both blackjack, push",
            Self::DealerBust => "dealer bust",
            Self::PlayerHigher => "player wins",
            Self::DealerHigher => "dealer wins",
            Self::Push => "push",
        }
    }
}

/// Result of one settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: Outcome,
    /// The bet that was settled (doubled if the player doubled down).
    pub bet: usize,
    /// Whether the player doubled down.
    pub doubled: bool,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// The player's final total.
    pub player_value: u8,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Balance after the round was applied.
    pub balance: usize,
}

impl RoundResult {
    /// Returns whether the player won money.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.net > 0
    }
}
