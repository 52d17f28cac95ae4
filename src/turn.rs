//! The turn engine: runs one hand's hit/stand decisions to completion.

use alloc::vec::Vec;

use log::trace;

use crate::card::Rank;
use crate::decision::{Decision, DecisionSource};
use crate::error::DealError;
use crate::hand::{Hand, HandStatus};
use crate::shoe::Shoe;

/// How a turn ended and what it drew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Terminal status: [`HandStatus::Blackjack`], [`HandStatus::Stand`], or
    /// [`HandStatus::Bust`].
    pub status: HandStatus,
    /// Cards dealt into the hand during the turn, in order.
    pub drawn: Vec<Rank>,
}

/// Plays `hand` until it stands or busts, drawing from `shoe`.
///
/// A natural blackjack ends the turn immediately without consulting
/// `source`. Otherwise the hand is checked for bust before every query, so a
/// source is never asked about a bust hand.
///
/// # Errors
///
/// Returns [`DealError::EmptyShoe`] if the source hits on an empty shoe.
/// Cards drawn before the failure stay in the hand.
pub fn play_turn<S>(
    hand: &mut Hand,
    shoe: &mut Shoe,
    source: &mut S,
    dealer_up: Option<Rank>,
) -> Result<TurnOutcome, DealError>
where
    S: DecisionSource + ?Sized,
{
    let mut drawn = Vec::new();

    if hand.is_blackjack() {
        return Ok(TurnOutcome {
            status: HandStatus::Blackjack,
            drawn,
        });
    }

    loop {
        if hand.is_bust() {
            return Ok(TurnOutcome {
                status: HandStatus::Bust,
                drawn,
            });
        }

        let decision = source.decide(hand, dealer_up);
        trace!("{decision:?} on {}", hand.value());

        match decision {
            Decision::Hit => {
                let card = shoe.deal()?;
                hand.add_card(card);
                drawn.push(card);
            }
            Decision::Stand => {
                return Ok(TurnOutcome {
                    status: HandStatus::Stand,
                    drawn,
                });
            }
        }
    }
}
