//! The shoe: one or more shuffled decks dealt from the top.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{DECK_SIZE, Rank, SUITS_PER_DECK};
use crate::error::DealError;

/// Fraction of the shoe that may be dealt before it is rebuilt.
pub const RESHUFFLE_THRESHOLD: f64 = 0.75;

/// Cards held back per participant so a round can usually be played out
/// without the shoe running dry.
pub const ROUND_RESERVE_PER_HAND: usize = 4;

/// A shuffled stack of ranks built from one or more decks.
///
/// The shoe is owned by whoever runs the round and passed by `&mut` to
/// everything that deals from it. Cards that have been dealt are not
/// tracked; a reshuffle always rebuilds the full shoe.
///
/// # Example
///
/// ```
/// use bjtable::Shoe;
///
/// let mut shoe = Shoe::new(1, 7);
/// assert_eq!(shoe.remaining(), 52);
/// let _card = shoe.deal().unwrap();
/// assert_eq!(shoe.remaining(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards; the last element is dealt next.
    cards: Vec<Rank>,
    /// Size of the shoe at the last build.
    original_size: usize,
    /// Number of decks used on rebuild.
    decks: u8,
    /// Used fraction at which [`Shoe::needs_reshuffle`] fires.
    penetration: f64,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds and shuffles a shoe of `decks` decks using the given seed.
    ///
    /// The deck count is assumed valid (see [`TableOptions::validate`]).
    ///
    /// [`TableOptions::validate`]: crate::TableOptions::validate
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(decks, &mut rng);
        debug!("built shoe: {decks} deck(s), {} cards", cards.len());

        Self {
            original_size: cards.len(),
            cards,
            decks,
            penetration: RESHUFFLE_THRESHOLD,
            rng,
        }
    }

    /// Creates a shoe that deals `draws` in the given order.
    ///
    /// Useful for replaying a known sequence. The original size is the
    /// number of cards given; a later reshuffle builds one regular deck.
    #[must_use]
    pub fn stacked(draws: &[Rank]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();

        Self {
            original_size: cards.len(),
            cards,
            decks: 1,
            penetration: RESHUFFLE_THRESHOLD,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Sets the penetration threshold. Zero disables reshuffling.
    #[must_use]
    pub fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Lays out four of every rank per deck, then shuffles uniformly.
    fn build(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Rank> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for _ in 0..SUITS_PER_DECK {
                cards.extend_from_slice(&Rank::ALL);
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Rebuilds the shoe from scratch, discarding whatever was left.
    pub fn reshuffle(&mut self) {
        self.cards = Self::build(self.decks, &mut self.rng);
        self.original_size = self.cards.len();
        debug!("reshuffled shoe: {} cards", self.original_size);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyShoe`] if no cards remain.
    pub fn deal(&mut self) -> Result<Rank, DealError> {
        let card = self.cards.pop().ok_or(DealError::EmptyShoe)?;
        trace!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the fraction of the shoe dealt since the last build.
    #[must_use]
    pub fn used_fraction(&self) -> f64 {
        if self.original_size == 0 {
            return 1.0;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let remaining_ratio = self.cards.len() as f64 / self.original_size as f64;

        1.0 - remaining_ratio
    }

    /// Returns whether the used fraction has reached the penetration
    /// threshold. Only meaningful between rounds.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        if self.penetration <= 0.0 {
            return false;
        }

        self.used_fraction() >= self.penetration
    }

    /// Reshuffles if [`Shoe::needs_reshuffle`] says so.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn check_and_reshuffle(&mut self) -> bool {
        if self.needs_reshuffle() {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Returns whether there are enough cards for the initial deal of
    /// `participants` hands (two cards each, dealer included).
    #[must_use]
    pub fn can_start_round(&self, participants: usize) -> bool {
        self.cards.len() >= 2 * participants
    }

    /// Returns whether the shoe can reasonably cover a whole round for
    /// `participants` hands, hits and dealer draws included.
    ///
    /// A shoe that has not been dealt from since its last build always
    /// passes, since rebuilding it would not add cards.
    #[must_use]
    pub fn can_cover_round(&self, participants: usize) -> bool {
        self.cards.len() == self.original_size
            || self.cards.len() >= ROUND_RESERVE_PER_HAND * participants
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the size of the shoe at its last build.
    #[must_use]
    pub const fn original_size(&self) -> usize {
        self.original_size
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the remaining cards, top of the shoe last.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }
}
