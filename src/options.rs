//! Table configuration options.

use crate::error::OptionsError;
use crate::shoe::RESHUFFLE_THRESHOLD;

/// Fewest decks a shoe may hold.
pub const MIN_DECKS: u8 = 1;
/// Most decks a shoe may hold.
pub const MAX_DECKS: u8 = 8;
/// Fewest seated players.
pub const MIN_PLAYERS: u8 = 1;
/// Most seated players.
pub const MAX_PLAYERS: u8 = 12;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_players(3)
///     .with_user_seat(2)
///     .with_hit_soft_17(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Number of seated players, not counting the dealer.
    pub players: u8,
    /// The user's seat, starting at 1. Seat 1 receives cards first.
    pub user_seat: u8,
    /// Whether the dealer draws on soft 17.
    pub hit_soft_17: bool,
    /// Shoe penetration (fraction of the shoe dealt before reshuffle).
    /// 0 to disable reshuffling.
    pub penetration: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            players: 5,
            user_seat: 1,
            hit_soft_17: true,
            penetration: RESHUFFLE_THRESHOLD,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of seated players.
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the user's seat.
    #[must_use]
    pub const fn with_user_seat(mut self, seat: u8) -> Self {
        self.user_seat = seat;
        self
    }

    /// Sets whether the dealer hits soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_hit_soft_17(false);
    /// assert!(!options.hit_soft_17);
    /// ```
    #[must_use]
    pub const fn with_hit_soft_17(mut self, hit: bool) -> Self {
        self.hit_soft_17 = hit;
        self
    }

    /// Sets the shoe penetration.
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Checks that deck count, player count, seat, and penetration are in
    /// range.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range setting found.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks < MIN_DECKS || self.decks > MAX_DECKS {
            return Err(OptionsError::InvalidDecks {
                got: self.decks,
                min: MIN_DECKS,
                max: MAX_DECKS,
            });
        }

        if self.players < MIN_PLAYERS || self.players > MAX_PLAYERS {
            return Err(OptionsError::InvalidPlayers {
                got: self.players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        if self.user_seat < 1 || self.user_seat > self.players {
            return Err(OptionsError::InvalidSeat {
                got: self.user_seat,
                players: self.players,
            });
        }

        // NaN fails both comparisons.
        let penetration_in_range = self.penetration >= 0.0 && self.penetration <= 1.0;
        if !penetration_in_range {
            return Err(OptionsError::InvalidPenetration);
        }

        Ok(())
    }
}
