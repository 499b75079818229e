//! Hand representation and blackjack valuation.

use crate::card::Card;

/// Total above which a hand is bust.
pub const BLACKJACK: u8 = 21;

/// Evaluates cards, returning the best total and whether an Ace still counts as 11.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.rank.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Returns the best total for `cards`.
///
/// Every Ace starts at 11; while the total is over 21, Aces drop to 1 one at a
/// time. The result only exceeds 21 when all Aces already count as 1.
#[must_use]
pub fn best_total(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// A hand of cards, used for both the player and the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the best total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        best_total(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect();
        Hand::from_cards(&cards)
    }

    #[test]
    fn single_ace_counts_high_when_safe() {
        let h = hand(&[Rank::Ace, Rank::Six]);
        assert_eq!(h.value(), 17);
        assert!(h.is_soft());
    }

    #[test]
    fn aces_drop_to_one_one_at_a_time() {
        let h = hand(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(h.value(), 21);
        assert!(h.is_soft());

        let h = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(h.value(), 14);

        let h = hand(&[Rank::Ace, Rank::Nine, Rank::Five]);
        assert_eq!(h.value(), 15);
        assert!(!h.is_soft());
    }

    #[test]
    fn bust_only_when_every_ace_is_low() {
        let h = hand(&[Rank::King, Rank::Queen, Rank::Ace]);
        assert_eq!(h.value(), 21);
        assert!(!h.is_bust());

        let h = hand(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Ace]);
        assert_eq!(h.value(), 22);
        assert!(h.is_bust());
    }

    #[test]
    fn best_total_never_exceeds_21_when_some_arrangement_fits() {
        for extra in Rank::ALL {
            for second in Rank::ALL {
                let h = hand(&[Rank::Ace, second, extra]);
                let all_low: u8 = h
                    .cards()
                    .iter()
                    .map(|c| if c.is_ace() { 1 } else { c.rank.value() })
                    .sum();
                if all_low <= BLACKJACK {
                    assert!(h.value() <= BLACKJACK, "{:?}", h.cards());
                } else {
                    assert!(h.is_bust());
                }
            }
        }
    }

    #[test]
    fn blackjack_needs_exactly_two_cards() {
        assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
        assert!(hand(&[Rank::Ten, Rank::Ace]).is_blackjack());
        assert!(!hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_blackjack());
        assert!(!hand(&[Rank::Ten, Rank::Nine]).is_blackjack());
    }

    #[test]
    fn empty_hand_is_zero() {
        let h = Hand::new();
        assert!(h.is_empty());
        assert_eq!(h.value(), 0);
        assert!(!h.is_bust());
        assert!(!h.is_soft());
    }
}
