//! Table engine and round state management.

use alloc::vec;
use alloc::vec::Vec;

use crate::dealer::DealerPolicy;
use crate::error::{OptionsError, RoundError};
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::options::TableOptions;
use crate::result::SessionStats;
use crate::shoe::Shoe;

mod deal;
mod showdown;
pub mod state;
mod turns;

pub use deal::RoundStart;
pub use state::TableState;

/// A blackjack table: one shoe, a row of seats, and the dealer.
///
/// The table owns the shoe exclusively. Rounds run strictly in sequence:
/// [`Table::start_round`], [`Table::play_players`], [`Table::dealer_play`],
/// then [`Table::showdown`]. [`Table::play_round`] runs all four.
///
/// # Example
///
/// ```
/// use bjtable::{FixedStand, Table, TableOptions};
///
/// let options = TableOptions::default().with_players(3).with_user_seat(2);
/// let mut table = Table::new(options, 42).unwrap();
/// let result = table.play_round(&mut FixedStand).unwrap();
/// assert_eq!(result.seats.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Table options.
    options: TableOptions,
    /// Current table state.
    state: TableState,
    /// Seat hands for the current round, seat 1 first.
    hands: Vec<Hand>,
    /// How each seat's turn ended.
    statuses: Vec<HandStatus>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    dealer_policy: DealerPolicy,
    /// The user's results so far.
    stats: SessionStats,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of range.
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, seed).with_penetration(options.penetration);
        Ok(Self::from_parts(options, shoe))
    }

    /// Creates a table that deals from the given shoe.
    ///
    /// The shoe's own penetration is kept; `options.decks` and
    /// `options.penetration` are not applied to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of range.
    pub fn with_shoe(options: TableOptions, shoe: Shoe) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::from_parts(options, shoe))
    }

    fn from_parts(options: TableOptions, shoe: Shoe) -> Self {
        let players = usize::from(options.players);
        Self {
            shoe,
            dealer_policy: DealerPolicy::new(options.hit_soft_17),
            options,
            state: TableState::WaitingForRound,
            hands: vec![Hand::new(); players],
            statuses: vec![HandStatus::Active; players],
            dealer_hand: DealerHand::new(),
            stats: SessionStats::default(),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the current table state.
    #[must_use]
    pub const fn state(&self) -> TableState {
        self.state
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the number of hands dealt each round, dealer included.
    #[must_use]
    pub fn participants(&self) -> usize {
        usize::from(self.options.players) + 1
    }

    /// Returns the seat hands, seat 1 first.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns how each seat's turn ended, seat 1 first. Seats that have not
    /// played yet are [`HandStatus::Active`].
    #[must_use]
    pub fn statuses(&self) -> &[HandStatus] {
        &self.statuses
    }

    /// Returns the hand for `seat` (starting at 1).
    #[must_use]
    pub fn hand(&self, seat: u8) -> Option<&Hand> {
        usize::from(seat)
            .checked_sub(1)
            .and_then(|index| self.hands.get(index))
    }

    /// Returns the user's hand.
    #[must_use]
    pub fn user_hand(&self) -> Option<&Hand> {
        self.hand(self.options.user_seat)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the user's running results.
    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Rebuilds the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), RoundError> {
        if !self.state.is_between_rounds() {
            return Err(RoundError::InvalidState);
        }

        self.shoe.reshuffle();
        Ok(())
    }

    /// Discards all hands and returns to `WaitingForRound`.
    pub fn clear_round(&mut self) {
        for hand in &mut self.hands {
            *hand = Hand::new();
        }
        self.statuses.fill(HandStatus::Active);
        self.dealer_hand.clear();
        self.state = TableState::WaitingForRound;
    }
}
