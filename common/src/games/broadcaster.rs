use std::future::Future;

use crate::games::gomoku::{GameOverNotification, GameStateUpdate};

/// Observer side of a running game. The session never hands out its own state;
/// renderers only see the snapshots passed here.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
