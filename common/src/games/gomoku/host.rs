use std::time::Duration;
use tokio::task::JoinHandle;

use crate::{SessionId, log};
use crate::games::GameBroadcaster;
use super::game_state::GomokuGameState;
use super::notifications::GameOverNotification;
use super::session::{GomokuSession, GomokuSessionState};
use super::settings::GameSettings;
use super::types::{MoveError, MoveOutcome};

struct RunningGame {
    state: GomokuSessionState,
    handle: JoinHandle<Option<GameOverNotification>>,
}

/// Keeps at most one game alive. Starting a new game aborts the previous
/// session task, which also drops any bot move still waiting on its delay.
pub struct GameHost<B: GameBroadcaster> {
    broadcaster: B,
    bot_delay: Duration,
    current: Option<RunningGame>,
    games_started: u64,
}

impl<B: GameBroadcaster> GameHost<B> {
    pub fn new(broadcaster: B, bot_delay: Duration) -> Self {
        Self {
            broadcaster,
            bot_delay,
            current: None,
            games_started: 0,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, settings: GameSettings) -> Result<SessionId, String> {
        let session_id = SessionId::new(format!("game-{}", self.games_started + 1));
        let state = GomokuSessionState::create(session_id.clone(), settings, self.bot_delay)?;

        self.stop();
        self.games_started += 1;

        let handle = tokio::spawn(GomokuSession::run(state.clone(), self.broadcaster.clone()));
        self.current = Some(RunningGame { state, handle });

        Ok(session_id)
    }

    pub fn stop(&mut self) {
        if let Some(previous) = self.current.take() {
            if !previous.handle.is_finished() {
                log!("[session:{}] Session cancelled", previous.state.session_id);
            }
            previous.handle.abort();
        }
    }

    pub async fn submit_move(&self, row: i64, col: i64) -> Result<MoveOutcome, MoveError> {
        let Some(ref running) = self.current else {
            return Err(MoveError::NoActiveGame);
        };
        GomokuSession::handle_move(&running.state, row, col).await
    }

    pub async fn snapshot(&self) -> Option<GomokuGameState> {
        match self.current {
            Some(ref running) => Some(running.state.snapshot().await),
            None => None,
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.current.as_ref().map(|running| &running.state.session_id)
    }

    pub fn is_running(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|running| !running.handle.is_finished())
    }

    pub fn games_started(&self) -> u64 {
        self.games_started
    }
}

impl<B: GameBroadcaster> Drop for GameHost<B> {
    fn drop(&mut self) {
        if let Some(running) = self.current.take() {
            running.handle.abort();
        }
    }
}
