//! Hit/stand decisions and the sources that make them.

use core::str::FromStr;

use crate::card::Rank;
use crate::error::DecisionError;
use crate::hand::Hand;

/// A single turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Decision {
    type Err = DecisionError;

    /// Parses `h` or `s`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "h" | "H" => Ok(Self::Hit),
            "s" | "S" => Ok(Self::Stand),
            _ => Err(DecisionError::Invalid),
        }
    }
}

/// Something that decides whether a hand hits or stands.
///
/// The turn engine calls [`DecisionSource::decide`] once per step and blocks
/// on it; a human source may wait on input for as long as it likes.
pub trait DecisionSource {
    /// Decides the next move for `hand`, given the dealer's up card.
    fn decide(&mut self, hand: &Hand, dealer_up: Option<Rank>) -> Decision;
}

impl<F> DecisionSource for F
where
    F: FnMut(&Hand, Option<Rank>) -> Decision,
{
    fn decide(&mut self, hand: &Hand, dealer_up: Option<Rank>) -> Decision {
        self(hand, dealer_up)
    }
}

/// Automated seat policy: always stands, without looking at the hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedStand;

impl DecisionSource for FixedStand {
    fn decide(&mut self, _hand: &Hand, _dealer_up: Option<Rank>) -> Decision {
        Decision::Stand
    }
}
