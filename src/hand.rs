//! Player and dealer hands, and the blackjack hand valuer.
//!
//! The free functions in this module work on any slice of ranks; [`Hand`]
//! and [`DealerHand`] delegate to them.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Rank;

/// Best total that does not go over 21.
pub const BLACKJACK: u8 = 21;

/// Dealer's standing total.
pub const DEALER_STAND: u8 = 17;

fn evaluate_cards(cards: &[Rank]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.value());
    }

    while value > u16::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Returns the best blackjack total for `cards`.
///
/// Aces start at 11 and are demoted to 1, one at a time, while the total is
/// over 21. The result may still exceed 21, which means the hand is bust.
///
/// # Example
///
/// ```
/// use bjtable::Rank::{Ace, King, Nine};
/// use bjtable::hand;
///
/// assert_eq!(hand::value(&[Ace, Ace, Nine]), 21);
/// assert_eq!(hand::value(&[Ace, King]), 21);
/// ```
#[must_use]
pub fn value(cards: &[Rank]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns the total with every ace counted as 1.
#[must_use]
pub fn hard_total(cards: &[Rank]) -> u8 {
    let total: u16 = cards
        .iter()
        .map(|card| if card.is_ace() { 1 } else { u16::from(card.value()) })
        .sum();
    u8::try_from(total).unwrap_or(u8::MAX)
}

/// Returns whether an ace is still counted as 11 in the best total.
#[must_use]
pub fn is_soft(cards: &[Rank]) -> bool {
    evaluate_cards(cards).1
}

/// Returns whether `cards` is a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_blackjack(cards: &[Rank]) -> bool {
    cards.len() == 2 && value(cards) == BLACKJACK
}

/// Returns whether `cards` totals over 21.
#[must_use]
pub fn is_bust(cards: &[Rank]) -> bool {
    value(cards) > BLACKJACK
}

/// Returns whether `cards` is a soft 17.
///
/// A total of 17 is soft exactly when the hard total is 7, since at most
/// one ace can be counted as 11 without busting. This holds for hands with
/// several aces too, e.g. `A A 5`.
#[must_use]
pub fn is_soft_17(cards: &[Rank]) -> bool {
    value(cards) == DEALER_STAND && hard_total(cards) == DEALER_STAND - 10
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is still taking decisions.
    Active,
    /// The hand stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (natural 21).
    Blackjack,
}

/// A seated player's hand for one round.
///
/// Cards are only ever appended; a hand never gives a card back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn from_cards(cards: &[Rank]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Rank) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        value(&self.cards)
    }

    /// Returns the total with every ace counted as 1.
    #[must_use]
    pub fn hard_total(&self) -> u8 {
        hard_total(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is a soft 17.
    #[must_use]
    pub fn is_soft_17(&self) -> bool {
        is_soft_17(&self.cards)
    }

    /// Returns the status implied by the cards alone: blackjack, bust, or
    /// still active.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        if self.is_blackjack() {
            HandStatus::Blackjack
        } else if self.is_bust() {
            HandStatus::Bust
        } else {
            HandStatus::Active
        }
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

/// The dealer's hand.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Rank) {
        self.hand.add_card(card);
    }

    /// Returns the underlying hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        self.hand.cards()
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.hand.cards().first().copied()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, Rank::value)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand = Hand::new();
        self.hole_revealed = false;
    }
}
