use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};

use crate::{SessionId, log};
use crate::games::GameBroadcaster;
use super::bot_controller::{BotInput, BotType, MoveSource, calculate_move};
use super::game_state::GomokuGameState;
use super::notifications::{GameOverNotification, GameStateUpdate};
use super::settings::GameSettings;
use super::types::{MoveError, MoveOutcome};

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(500);

/// Shared handle to one game. Every accepted human move leaves its snapshot in
/// the applied-move queue, so the run loop publishes each board exactly once.
#[derive(Clone)]
pub struct GomokuSessionState {
    pub session_id: SessionId,
    pub game_state: Arc<Mutex<GomokuGameState>>,
    pub bot_delay: Duration,
    applied_tx: mpsc::UnboundedSender<GameStateUpdate>,
    applied_rx: Arc<Mutex<mpsc::UnboundedReceiver<GameStateUpdate>>>,
}

impl GomokuSessionState {
    pub fn create(
        session_id: SessionId,
        settings: GameSettings,
        bot_delay: Duration,
    ) -> Result<Self, String> {
        let game_state = GomokuGameState::new(settings)?;
        let (applied_tx, applied_rx) = mpsc::unbounded_channel();

        Ok(Self {
            session_id,
            game_state: Arc::new(Mutex::new(game_state)),
            bot_delay,
            applied_tx,
            applied_rx: Arc::new(Mutex::new(applied_rx)),
        })
    }

    pub async fn snapshot(&self) -> GomokuGameState {
        self.game_state.lock().await.clone()
    }
}

pub struct GomokuSession;

impl GomokuSession {
    /// Drives one game to its end. Human turns wait for [`handle_move`](Self::handle_move);
    /// bot turns are played here after `bot_delay`, so the previous move is always
    /// broadcast before the bot answers. One update goes out per accepted move.
    pub async fn run(
        session_state: GomokuSessionState,
        broadcaster: impl GameBroadcaster,
    ) -> Option<GameOverNotification> {
        log!(
            "[session:{}] Game started: {:?}",
            session_state.session_id,
            session_state.game_state.lock().await.settings()
        );

        let mut applied_moves = session_state.applied_rx.lock().await;
        broadcast_state(&session_state, &broadcaster).await;

        loop {
            // Moves are queued while the game lock is held, so draining under the
            // same lock sees every move that led to the status read here.
            let (pending, is_game_over, move_source) = {
                let game_state = session_state.game_state.lock().await;
                let mut pending = Vec::new();
                while let Ok(update) = applied_moves.try_recv() {
                    pending.push(update);
                }
                (
                    pending,
                    game_state.status().is_terminal(),
                    game_state.current_move_source(),
                )
            };

            for update in pending {
                broadcaster.broadcast_state(update).await;
            }

            if is_game_over {
                break;
            }

            let update = match move_source {
                MoveSource::Bot(bot_type) => play_bot_turn(&session_state, bot_type).await,
                MoveSource::Human => applied_moves.recv().await,
            };
            if let Some(update) = update {
                broadcaster.broadcast_state(update).await;
            }
        }

        let notification = {
            let game_state = session_state.game_state.lock().await;
            GameOverNotification::from_game_state(&session_state.session_id, &game_state)
        };

        if let Some(ref notification) = notification {
            log!(
                "[session:{}] Game over after {} moves: {}",
                session_state.session_id,
                notification.move_count,
                notification.message()
            );
            broadcaster.broadcast_game_over(notification.clone()).await;
        }

        notification
    }

    /// Submission from a human side. Rejected while the bot is on turn.
    pub async fn handle_move(
        state: &GomokuSessionState,
        row: i64,
        col: i64,
    ) -> Result<MoveOutcome, MoveError> {
        let mut game_state = state.game_state.lock().await;

        if game_state.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let current = game_state.current_player();
        if game_state.current_move_source().is_bot() {
            log!(
                "[session:{}] Ignored move at ({}, {}) during bot turn",
                state.session_id,
                row,
                col
            );
            return Err(MoveError::OutOfTurn {
                expected: current,
                actual: current.opponent(),
            });
        }

        match game_state.submit_signed(row, col) {
            Ok(outcome) => {
                let update = GameStateUpdate::from_game_state(&state.session_id, &game_state);
                // The receiver lives as long as any clone of the state.
                let _ = state.applied_tx.send(update);
                Ok(outcome)
            }
            Err(e) => {
                log!(
                    "[session:{}] {} failed to place stone at ({}, {}): {}",
                    state.session_id,
                    current,
                    row,
                    col,
                    e
                );
                Err(e)
            }
        }
    }
}

/// Returns the snapshot after the bot's stone, or `None` when nothing was placed.
async fn play_bot_turn(
    session_state: &GomokuSessionState,
    bot_type: BotType,
) -> Option<GameStateUpdate> {
    tokio::time::sleep(session_state.bot_delay).await;

    let mut game_state = session_state.game_state.lock().await;
    if game_state.status().is_terminal()
        || game_state.current_move_source() != MoveSource::Bot(bot_type)
    {
        return None;
    }

    let bot_input = BotInput::from_game_state(&game_state);
    let player = bot_input.player;

    let Some(pos) = calculate_move(bot_type, &bot_input) else {
        log!(
            "[session:{}] Bot {:?} found no move for {}",
            session_state.session_id,
            bot_type,
            player
        );
        return None;
    };

    match game_state.submit_move(pos) {
        Ok(_) => {
            log!(
                "[session:{}] Bot {:?} played {} at {}",
                session_state.session_id,
                bot_type,
                player,
                pos
            );
            Some(GameStateUpdate::from_game_state(
                &session_state.session_id,
                &game_state,
            ))
        }
        Err(e) => {
            log!(
                "[session:{}] Bot {:?} failed to place stone at {}: {}",
                session_state.session_id,
                bot_type,
                pos,
                e
            );
            None
        }
    }
}

async fn broadcast_state(session_state: &GomokuSessionState, broadcaster: &impl GameBroadcaster) {
    let update = {
        let game_state = session_state.game_state.lock().await;
        GameStateUpdate::from_game_state(&session_state.session_id, &game_state)
    };
    broadcaster.broadcast_state(update).await;
}
