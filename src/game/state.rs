//! Game state types.

/// Game state.
///
/// A round moves `PlayerActing -> DealerActing -> BotsActing -> Resolved`.
/// The dealer and bot phases run to completion inside [`Game::stay`], so
/// callers only observe them if a draw fails part way through.
///
/// [`Game::stay`]: super::Game::stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round and no stake. Lobby statistics are on display.
    #[default]
    Lobby,
    /// A stake has been placed and the round is ready to deal.
    Betting,
    /// Waiting for the player to hit or stay.
    PlayerActing,
    /// Dealer plays out their hand.
    DealerActing,
    /// Bot seats play out their hands.
    BotsActing,
    /// Round is over and the session has been settled.
    Resolved,
}
