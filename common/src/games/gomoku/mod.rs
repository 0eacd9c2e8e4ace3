mod board;
mod bot_controller;
mod game_state;
mod host;
mod layout;
mod notifications;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, BotType, MoveSource, calculate_move};
pub use game_state::GomokuGameState;
pub use host::GameHost;
pub use layout::BoardLayout;
pub use notifications::{GameOutcome, GameOverNotification, GameStateUpdate};
pub use session::{DEFAULT_BOT_DELAY, GomokuSession, GomokuSessionState};
pub use settings::{BOARD_SIZE_PRESETS, DEFAULT_BOARD_SIZE, GameSettings};
pub use types::{
    Cell, GameMode, GameStatus, MIN_BOARD_SIZE, MoveError, MoveOutcome, Player, Position,
    WIN_LENGTH, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line};
