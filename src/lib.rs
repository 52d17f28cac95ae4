//! A multi-seat blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Shoe`] of shuffled ranks, a hand valuer in
//! [`hand`], a turn engine driven by a [`DecisionSource`], the dealer's
//! [`DealerPolicy`], and the round resolver in [`result`]. [`Table`] ties
//! them together into repeated rounds with penetration-based reshuffling.
//!
//! # Example
//!
//! ```
//! use bjtable::{FixedStand, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42).unwrap();
//! let result = table.play_round(&mut FixedStand).unwrap();
//! assert_eq!(result.seats.len(), 5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod decision;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;
pub mod table;
pub mod turn;

// Re-export main types
pub use card::{DECK_SIZE, Rank};
pub use dealer::DealerPolicy;
pub use decision::{Decision, DecisionSource, FixedStand};
pub use error::{DealError, DecisionError, OptionsError, RoundError};
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::TableOptions;
pub use result::{RoundOutcome, RoundResult, SeatResult, SessionStats, Verdict};
pub use shoe::Shoe;
pub use table::{RoundStart, Table, TableState};
pub use turn::{TurnOutcome, play_turn};
