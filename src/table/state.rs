//! Table state types.

/// Table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Between rounds; the shoe may be reshuffled.
    WaitingForRound,
    /// Seats are taking their turns.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Every hand is finished and the round can be resolved.
    RoundOver,
    /// Outcomes have been resolved and recorded.
    Settled,
}

impl TableState {
    /// Returns whether a new round may start (and the shoe may be touched).
    #[must_use]
    pub const fn is_between_rounds(self) -> bool {
        matches!(self, Self::WaitingForRound | Self::Settled)
    }
}
