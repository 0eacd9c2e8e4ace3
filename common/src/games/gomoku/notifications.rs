use crate::SessionId;
use super::board::Board;
use super::game_state::GomokuGameState;
use super::types::{GameStatus, Player, Position, WinningLine};

/// Everything a renderer needs to redraw after a change.
#[derive(Clone, Debug)]
pub struct GameStateUpdate {
    pub session_id: SessionId,
    pub board: Board,
    pub current_player: Player,
    pub current_player_is_bot: bool,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub move_count: usize,
}

impl GameStateUpdate {
    pub fn from_game_state(session_id: &SessionId, state: &GomokuGameState) -> Self {
        Self {
            session_id: session_id.clone(),
            board: state.board().clone(),
            current_player: state.current_player(),
            current_player_is_bot: state.current_move_source().is_bot(),
            status: state.status(),
            last_move: state.last_move(),
            move_count: state.move_count(),
        }
    }

    pub fn accepts_input(&self) -> bool {
        !self.status.is_terminal() && !self.current_player_is_bot
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won(Player),
    Draw,
}

#[derive(Clone, Debug)]
pub struct GameOverNotification {
    pub session_id: SessionId,
    pub outcome: GameOutcome,
    pub winning_line: Option<WinningLine>,
    pub board: Board,
    pub move_count: usize,
}

impl GameOverNotification {
    /// `None` while the game is still running.
    pub fn from_game_state(session_id: &SessionId, state: &GomokuGameState) -> Option<Self> {
        let outcome = match state.status() {
            GameStatus::InProgress => return None,
            GameStatus::Won(player) => GameOutcome::Won(player),
            GameStatus::Draw => GameOutcome::Draw,
        };

        Some(Self {
            session_id: session_id.clone(),
            outcome,
            winning_line: state.winning_line(),
            board: state.board().clone(),
            move_count: state.move_count(),
        })
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Won(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }

    pub fn message(&self) -> String {
        match self.outcome {
            GameOutcome::Won(player) => format!("{} wins", player),
            GameOutcome::Draw => "Draw".to_string(),
        }
    }
}
