//! House rules for the dealer's hand.

use log::debug;

use crate::card::Rank;
use crate::decision::{Decision, DecisionSource};
use crate::error::DealError;
use crate::hand::{DEALER_STAND, DealerHand, Hand};
use crate::shoe::Shoe;
use crate::turn::{TurnOutcome, play_turn};

/// The dealer's fixed drawing rule.
///
/// The dealer hits below 17 and, when `hit_soft_17` is set, on soft 17.
/// It stands on everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    /// Whether the dealer draws on soft 17.
    pub hit_soft_17: bool,
}

impl DealerPolicy {
    /// Creates a policy with the given soft-17 rule.
    #[must_use]
    pub const fn new(hit_soft_17: bool) -> Self {
        Self { hit_soft_17 }
    }

    /// Returns whether the dealer must draw on `hand`.
    #[must_use]
    pub fn must_hit(&self, hand: &Hand) -> bool {
        hand.value() < DEALER_STAND || (self.hit_soft_17 && hand.is_soft_17())
    }

    /// Reveals the hole card and plays the dealer's hand out.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyShoe`] if the shoe runs out while the dealer
    /// must draw.
    pub fn play(
        &mut self,
        dealer: &mut DealerHand,
        shoe: &mut Shoe,
    ) -> Result<TurnOutcome, DealError> {
        dealer.reveal_hole();
        let outcome = play_turn(dealer.hand_mut(), shoe, self, None)?;
        debug!(
            "dealer finished on {} ({:?}, drew {})",
            dealer.value(),
            outcome.status,
            outcome.drawn.len()
        );
        Ok(outcome)
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DecisionSource for DealerPolicy {
    fn decide(&mut self, hand: &Hand, _dealer_up: Option<Rank>) -> Decision {
        if self.must_hit(hand) {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}
