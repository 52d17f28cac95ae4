use crate::decision::{DecisionSource, FixedStand};
use crate::error::RoundError;
use crate::turn::play_turn;

use super::{Table, TableState};

impl Table {
    /// Plays every seat's turn in seat order.
    ///
    /// The user's seat takes its decisions from `user`; every other seat
    /// stands. Naturals are skipped without a decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in player turn state or the shoe
    /// runs out while a seat is hitting.
    pub fn play_players<S>(&mut self, user: &mut S) -> Result<(), RoundError>
    where
        S: DecisionSource + ?Sized,
    {
        if self.state != TableState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        let dealer_up = self.dealer_hand.up_card();
        let user_index = usize::from(self.options.user_seat) - 1;

        for (index, hand) in self.hands.iter_mut().enumerate() {
            let outcome = if index == user_index {
                play_turn(hand, &mut self.shoe, &mut *user, dealer_up)?
            } else {
                play_turn(hand, &mut self.shoe, &mut FixedStand, dealer_up)?
            };
            self.statuses[index] = outcome.status;
        }

        self.state = TableState::DealerTurn;
        Ok(())
    }
}
