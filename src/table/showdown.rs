use alloc::vec::Vec;

use log::debug;

use crate::card::Rank;
use crate::decision::DecisionSource;
use crate::error::RoundError;
use crate::result::{RoundResult, SeatResult, all_bust, resolve};

use super::{Table, TableState};

impl Table {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals the hole card. If every seat has busted the dealer
    /// draws nothing; otherwise they draw below 17, and on soft 17 when the
    /// table hits soft 17.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in dealer turn state or the shoe
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Rank>, RoundError> {
        if self.state != TableState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        if all_bust(&self.hands) {
            self.dealer_hand.reveal_hole();
            self.state = TableState::RoundOver;
            debug!("every seat busted, dealer stands pat");
            return Ok(Vec::new());
        }

        let outcome = self
            .dealer_policy
            .play(&mut self.dealer_hand, &mut self.shoe)?;

        self.state = TableState::RoundOver;
        Ok(outcome.drawn)
    }

    /// Resolves every seat against the dealer.
    ///
    /// The user's outcome is added to [`Table::stats`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, RoundError> {
        if self.state != TableState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let dealer = self.dealer_hand.hand();
        let dealer_value = dealer.value();
        let user_seat = self.options.user_seat;

        let mut seats = Vec::with_capacity(self.hands.len());
        for (seat, hand) in (1..=u8::MAX).zip(&self.hands) {
            seats.push(SeatResult {
                seat,
                is_user: seat == user_seat,
                outcome: resolve(hand, dealer),
                player_value: hand.value(),
                dealer_value,
            });
        }

        let result = RoundResult {
            seats,
            dealer_value,
            dealer_bust: dealer.is_bust(),
            dealer_blackjack: dealer.is_blackjack(),
        };

        if let Some(user) = result.user() {
            self.stats.record(user.outcome);
        }

        self.state = TableState::Settled;
        Ok(result)
    }

    /// Runs a full round: deal, seat turns, dealer turn, showdown.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub fn play_round<S>(&mut self, user: &mut S) -> Result<RoundResult, RoundError>
    where
        S: DecisionSource + ?Sized,
    {
        self.start_round()?;
        self.play_players(user)?;
        self.dealer_play()?;
        self.showdown()
    }
}
