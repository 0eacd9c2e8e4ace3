use common::games::GameBroadcaster;
use common::games::gomoku::{
    Board, Cell, GameOverNotification, GameStateUpdate, GameStatus, Player, Position, WinningLine,
};

use crate::state::SharedState;

/// Renderer side of the game boundary: records every snapshot in the shared
/// view state and optionally redraws the board on stdout.
#[derive(Clone)]
pub struct ConsoleBroadcaster {
    shared_state: SharedState,
    echo: bool,
}

impl ConsoleBroadcaster {
    pub fn new(shared_state: SharedState, echo: bool) -> Self {
        Self { shared_state, echo }
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, state: GameStateUpdate) {
        let event = state.last_move.and_then(|pos| match state.board.get(pos) {
            Some(Cell::Occupied(player)) => Some(format!("{} played {}", player, pos)),
            _ => None,
        });
        // The game-over frame follows a terminal update and draws the final board.
        let frame = (self.echo && !state.status.is_terminal()).then(|| render_update(&state));

        if !self.shared_state.update_game_state(state) {
            return;
        }
        if let Some(event) = event {
            self.shared_state.add_event(event);
        }
        if let Some(frame) = frame {
            println!("{}", frame);
        }
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        let message = notification.message();
        let frame = self.echo.then(|| render_game_over(&notification));
        if !self.shared_state.is_active(&notification.session_id) {
            return;
        }
        self.shared_state.add_event(message);
        self.shared_state.set_game_over(notification);
        if let Some(frame) = frame {
            println!("{}", frame);
        }
    }
}

pub fn stone_symbol(player: Player) -> char {
    match player {
        Player::First => 'X',
        Player::Second => 'O',
    }
}

/// Text grid with row and column labels. The last move is wrapped in
/// parentheses and the stones of a winning line in brackets.
pub fn render_board(
    board: &Board,
    last_move: Option<Position>,
    winning_line: Option<&WinningLine>,
) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!("{:^3}", col));
    }
    out.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        out.push_str(&format!("{:>2} ", row));
        for (col, cell) in cells.iter().enumerate() {
            let pos = Position::new(row, col);
            let symbol = match cell {
                Cell::Empty => '.',
                Cell::Occupied(player) => stone_symbol(*player),
            };
            let (open, close) = if winning_line.is_some_and(|line| line.contains(pos)) {
                ('[', ']')
            } else if last_move == Some(pos) {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(symbol);
            out.push(close);
        }
        out.push('\n');
    }

    out
}

pub fn status_line(update: &GameStateUpdate) -> String {
    match update.status {
        GameStatus::InProgress if update.current_player_is_bot => format!(
            "{} ({}) is thinking...",
            update.current_player,
            stone_symbol(update.current_player)
        ),
        GameStatus::InProgress => format!(
            "{} ({}) to move",
            update.current_player,
            stone_symbol(update.current_player)
        ),
        GameStatus::Won(player) => format!("{} wins", player),
        GameStatus::Draw => "Draw".to_string(),
    }
}

pub fn render_update(update: &GameStateUpdate) -> String {
    format!(
        "{}Move {}: {}",
        render_board(&update.board, update.last_move, None),
        update.move_count,
        status_line(update)
    )
}

pub fn render_game_over(notification: &GameOverNotification) -> String {
    format!(
        "{}*** {} after {} moves. Type 'new' to play again. ***",
        render_board(&notification.board, None, notification.winning_line.as_ref()),
        notification.message(),
        notification.move_count
    )
}
