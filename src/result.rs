//! Round resolution and result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::Hand;

/// Coarse result of a hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Player wins.
    Win,
    /// Player loses.
    Lose,
    /// Push (tie).
    Push,
}

/// Why a hand won, lost, or pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player has blackjack and the dealer does not.
    PlayerBlackjack,
    /// Player and dealer both have blackjack.
    BlackjackPush,
    /// Dealer has blackjack and the player does not.
    DealerBlackjack,
    /// Player busted.
    PlayerBust,
    /// Dealer busted and the player did not.
    DealerBust,
    /// Player's total beats the dealer's.
    PlayerHigher,
    /// Dealer's total beats the player's.
    PlayerLower,
    /// Totals are equal.
    ValuePush,
}

impl RoundOutcome {
    /// Returns the win/lose/push verdict for this outcome.
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerHigher => Verdict::Win,
            Self::DealerBlackjack | Self::PlayerBust | Self::PlayerLower => Verdict::Lose,
            Self::BlackjackPush | Self::ValuePush => Verdict::Push,
        }
    }
}

/// Classifies a finished player hand against the dealer's finished hand.
///
/// Rules apply in order and the first match wins: naturals on both sides
/// push, a player natural wins, a player bust loses (even if the dealer also
/// busts), a dealer bust wins, a dealer natural loses, then totals compare.
#[must_use]
pub fn resolve(player: &Hand, dealer: &Hand) -> RoundOutcome {
    let player_blackjack = player.is_blackjack();
    let dealer_blackjack = dealer.is_blackjack();

    if player_blackjack && dealer_blackjack {
        RoundOutcome::BlackjackPush
    } else if player_blackjack {
        RoundOutcome::PlayerBlackjack
    } else if player.is_bust() {
        RoundOutcome::PlayerBust
    } else if dealer.is_bust() {
        RoundOutcome::DealerBust
    } else if dealer_blackjack {
        RoundOutcome::DealerBlackjack
    } else {
        match player.value().cmp(&dealer.value()) {
            core::cmp::Ordering::Greater => RoundOutcome::PlayerHigher,
            core::cmp::Ordering::Less => RoundOutcome::PlayerLower,
            core::cmp::Ordering::Equal => RoundOutcome::ValuePush,
        }
    }
}

/// Resolves every player hand against the dealer, in seat order.
#[must_use]
pub fn resolve_all(players: &[Hand], dealer: &Hand) -> Vec<RoundOutcome> {
    players.iter().map(|hand| resolve(hand, dealer)).collect()
}

/// Returns whether every player hand is bust, in which case the dealer has
/// nothing to play for. Vacuously true for no hands.
#[must_use]
pub fn all_bust(players: &[Hand]) -> bool {
    players.iter().all(Hand::is_bust)
}

/// Result for a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatResult {
    /// Seat number, starting at 1.
    pub seat: u8,
    /// Whether this is the user's seat.
    pub is_user: bool,
    /// The outcome of the hand.
    pub outcome: RoundOutcome,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// Results for each seat.
    pub seats: Vec<SeatResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Returns the user's seat result.
    #[must_use]
    pub fn user(&self) -> Option<&SeatResult> {
        self.seats.iter().find(|seat| seat.is_user)
    }
}

/// Running totals for the user's seat across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds resolved.
    pub rounds: u32,
    /// Rounds won.
    pub wins: u32,
    /// Rounds lost.
    pub losses: u32,
    /// Rounds pushed.
    pub pushes: u32,
    /// Naturals dealt to the user.
    pub blackjacks: u32,
}

impl SessionStats {
    /// Counts one resolved round.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        self.rounds += 1;
        match outcome.verdict() {
            Verdict::Win => self.wins += 1,
            Verdict::Lose => self.losses += 1,
            Verdict::Push => self.pushes += 1,
        }
        if matches!(
            outcome,
            RoundOutcome::PlayerBlackjack | RoundOutcome::BlackjackPush
        ) {
            self.blackjacks += 1;
        }
    }
}
