use crate::config::Validate;
use super::board::Board;
use super::bot_controller::MoveSource;
use super::settings::GameSettings;
use super::types::{GameStatus, MoveError, MoveOutcome, Player, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// State machine of a single game, from the first stone to a win or a draw.
#[derive(Clone, Debug)]
pub struct GomokuGameState {
    board: Board,
    settings: GameSettings,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
    move_count: usize,
}

impl GomokuGameState {
    pub fn new(settings: GameSettings) -> Result<Self, String> {
        settings.validate()?;
        let board = Board::new(settings.board_size)?;

        Ok(Self {
            board,
            settings,
            current_player: Player::First,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
            move_count: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn move_source(&self, player: Player) -> MoveSource {
        self.settings.move_source(player)
    }

    pub fn current_move_source(&self) -> MoveSource {
        self.move_source(self.current_player)
    }

    /// Plays a stone for whoever is on turn.
    pub fn submit_move(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.place(pos, self.current_player)?;
        self.last_move = Some(pos);
        self.move_count += 1;

        if let Some(line) = check_win_with_line(&self.board, pos) {
            self.status = GameStatus::Won(self.current_player);
            self.winning_line = Some(line);
            return Ok(MoveOutcome::Won(self.current_player));
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.switch_turn();
        Ok(MoveOutcome::Continue {
            next: self.current_player,
        })
    }

    /// Same as [`submit_move`](Self::submit_move) but rejects a submission made by
    /// the side that is not on turn.
    pub fn submit_move_as(
        &mut self,
        player: Player,
        pos: Position,
    ) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player {
            return Err(MoveError::OutOfTurn {
                expected: self.current_player,
                actual: player,
            });
        }
        self.submit_move(pos)
    }

    pub fn submit_signed(&mut self, row: i64, col: i64) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = self.board.resolve(row, col)?;
        self.submit_move(pos)
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}
