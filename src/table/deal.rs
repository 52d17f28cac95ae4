use log::debug;

use crate::error::RoundError;

use super::{Table, TableState};

/// What happened when a round was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStart {
    /// Whether the shoe was rebuilt before dealing.
    pub reshuffled: bool,
    /// Cards left in the shoe after the initial deal.
    pub cards_remaining: usize,
}

impl Table {
    /// Starts a round and performs the initial deal.
    ///
    /// The shoe is reshuffled first if its penetration has been reached or it
    /// is running too low for a whole round (see [`Shoe::can_cover_round`]);
    /// this is the only point where a round reshuffles. Cards go out one per
    /// seat in seat order, then the dealer's up card, then a second card per
    /// seat, then the dealer's hole card.
    ///
    /// [`Shoe::can_cover_round`]: crate::Shoe::can_cover_round
    ///
    /// Any hands left over from a settled round are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the shoe cannot
    /// cover two cards per participant.
    pub fn start_round(&mut self) -> Result<RoundStart, RoundError> {
        if !self.state.is_between_rounds() {
            return Err(RoundError::InvalidState);
        }

        self.clear_round();

        let participants = self.participants();
        let reshuffled = if self.shoe.can_start_round(participants)
            && self.shoe.can_cover_round(participants)
        {
            self.shoe.check_and_reshuffle()
        } else {
            self.shoe.reshuffle();
            true
        };
        if !self.shoe.can_start_round(participants) {
            return Err(RoundError::NotEnoughCards);
        }

        for hand in &mut self.hands {
            hand.add_card(self.shoe.deal()?);
        }
        self.dealer_hand.add_card(self.shoe.deal()?);

        for hand in &mut self.hands {
            hand.add_card(self.shoe.deal()?);
        }
        self.dealer_hand.add_card(self.shoe.deal()?);

        self.state = TableState::PlayerTurn;

        let cards_remaining = self.shoe.remaining();
        debug!(
            "round started: {} seat(s), reshuffled: {reshuffled}, {cards_remaining} cards left",
            self.hands.len()
        );

        Ok(RoundStart {
            reshuffled,
            cards_remaining,
        })
    }
}
