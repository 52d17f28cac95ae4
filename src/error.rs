//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
///
/// Callers are expected to check [`Shoe::can_start_round`] and
/// [`Shoe::needs_reshuffle`] before a round, so this signals a broken
/// contract rather than a condition to recover from.
///
/// [`Shoe::can_start_round`]: crate::Shoe::can_start_round
/// [`Shoe::needs_reshuffle`]: crate::Shoe::needs_reshuffle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

/// Errors raised by invalid table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Deck count outside the supported range.
    #[error("deck count must be between {min} and {max}, got {got}")]
    InvalidDecks {
        /// Requested deck count.
        got: u8,
        /// Smallest allowed value.
        min: u8,
        /// Largest allowed value.
        max: u8,
    },
    /// Player count outside the supported range.
    #[error("player count must be between {min} and {max}, got {got}")]
    InvalidPlayers {
        /// Requested player count.
        got: u8,
        /// Smallest allowed value.
        min: u8,
        /// Largest allowed value.
        max: u8,
    },
    /// The user's seat is not one of the table's seats.
    #[error("seat must be between 1 and {players}, got {got}")]
    InvalidSeat {
        /// Requested seat.
        got: u8,
        /// Number of seats at the table.
        players: u8,
    },
    /// Penetration is not a fraction between 0 and 1.
    #[error("penetration must be between 0 and 1")]
    InvalidPenetration,
}

/// Error returned when a typed decision is neither hit nor stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// Input was not recognised.
    #[error("expected 'h' to hit or 's' to stand")]
    Invalid,
}

/// Errors that can occur while running a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid table state for this operation.
    #[error("invalid table state for this operation")]
    InvalidState,
    /// Not enough cards in the shoe for the initial deal.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
    /// The shoe ran out while a hand was drawing.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}

impl From<DealError> for RoundError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::EmptyShoe => Self::EmptyShoe,
        }
    }
}
