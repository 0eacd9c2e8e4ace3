use serde::{Deserialize, Serialize};

use super::board::{Board, get_available_moves};
use super::game_state::GomokuGameState;
use super::types::{Cell, Player, Position, WIN_LENGTH};
use super::win_detector::check_win;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    #[default]
    FirstEmpty,
    Blocker,
}

/// Who produces the moves for one side of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveSource {
    Human,
    Bot(BotType),
}

impl MoveSource {
    pub fn is_bot(&self) -> bool {
        matches!(self, MoveSource::Bot(_))
    }
}

pub struct BotInput {
    pub board: Board,
    pub player: Player,
}

impl BotInput {
    pub fn from_game_state(state: &GomokuGameState) -> Self {
        Self {
            board: state.board().clone(),
            player: state.current_player(),
        }
    }
}

/// Picks the next move for `input.player`. Every policy is a pure function of
/// the board snapshot and returns a currently empty cell, or `None` on a full board.
pub fn calculate_move(bot_type: BotType, input: &BotInput) -> Option<Position> {
    match bot_type {
        BotType::FirstEmpty => calculate_first_empty_move(&input.board),
        BotType::Blocker => calculate_blocker_move(input),
    }
}

fn calculate_first_empty_move(board: &Board) -> Option<Position> {
    board.first_empty()
}

fn calculate_blocker_move(input: &BotInput) -> Option<Position> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();
    let bot = input.player;
    let opponent = bot.opponent();

    if let Some(pos) = find_winning_move(&mut board, bot, &available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(&mut board, opponent, &available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_open_four_move(&mut board, bot, &available_moves) {
        return Some(pos);
    }

    if let Some(pos) = find_open_four_move(&mut board, opponent, &available_moves) {
        return Some(pos);
    }

    available_moves.first().copied()
}

fn find_winning_move(board: &mut Board, player: Player, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.set_unchecked(pos, Cell::Occupied(player));
        let wins = check_win(board, pos);
        board.set_unchecked(pos, Cell::Empty);

        if wins {
            return Some(pos);
        }
    }
    None
}

fn find_open_four_move(board: &mut Board, player: Player, moves: &[Position]) -> Option<Position> {
    for &pos in moves {
        board.set_unchecked(pos, Cell::Occupied(player));
        let threat = has_open_four(board, player, pos);
        board.set_unchecked(pos, Cell::Empty);

        if threat {
            return Some(pos);
        }
    }
    None
}

/// A run of four through `pos` with both ends empty.
fn has_open_four(board: &Board, player: Player, pos: Position) -> bool {
    let directions: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

    for (dr, dc) in directions {
        let (forward, forward_open) = scan(board, player, pos, dr, dc);
        let (backward, backward_open) = scan(board, player, pos, -dr, -dc);

        if forward + backward + 1 == WIN_LENGTH - 1 && forward_open && backward_open {
            return true;
        }
    }

    false
}

fn scan(board: &Board, player: Player, pos: Position, dr: isize, dc: isize) -> (usize, bool) {
    let mut count = 0;
    let mut current = pos;

    loop {
        let next = current
            .row
            .checked_add_signed(dr)
            .zip(current.col.checked_add_signed(dc))
            .map(|(row, col)| Position::new(row, col));

        match next.and_then(|next| board.get(next).map(|cell| (next, cell))) {
            Some((next, Cell::Occupied(occupant))) if occupant == player => {
                count += 1;
                current = next;
            }
            Some((_, Cell::Empty)) => return (count, true),
            _ => return (count, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(row, col, player) in stones {
            board.place(Position::new(row, col), player).unwrap();
        }
        board
    }

    fn input(board: Board, player: Player) -> BotInput {
        BotInput { board, player }
    }

    #[test]
    fn test_first_empty_picks_row_major_cell() {
        let board = board_with(
            5,
            &[
                (0, 0, Player::First),
                (0, 1, Player::Second),
                (0, 2, Player::First),
                (0, 3, Player::Second),
                (0, 4, Player::First),
            ],
        );
        let pos = calculate_move(BotType::FirstEmpty, &input(board, Player::Second));
        assert_eq!(pos, Some(Position::new(1, 0)));
    }

    #[test]
    fn test_first_empty_skips_occupied_origin() {
        let board = board_with(15, &[(0, 0, Player::First)]);
        let pos = calculate_move(BotType::FirstEmpty, &input(board, Player::Second));
        assert_eq!(pos, Some(Position::new(0, 1)));
    }

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new(5).unwrap();
        let mut player = Player::First;
        for pos in get_available_moves(&board.clone()) {
            board.place(pos, player).unwrap();
            player = player.opponent();
        }

        assert_eq!(calculate_move(BotType::FirstEmpty, &input(board.clone(), player)), None);
        assert_eq!(calculate_move(BotType::Blocker, &input(board, player)), None);
    }

    #[test]
    fn test_blocker_completes_own_five() {
        let board = board_with(
            15,
            &[
                (7, 3, Player::Second),
                (7, 4, Player::Second),
                (7, 5, Player::Second),
                (7, 6, Player::Second),
                (0, 0, Player::First),
                (0, 1, Player::First),
                (0, 2, Player::First),
                (0, 3, Player::First),
            ],
        );
        let pos = calculate_move(BotType::Blocker, &input(board, Player::Second)).unwrap();
        assert!(pos == Position::new(7, 2) || pos == Position::new(7, 7));
    }

    #[test]
    fn test_blocker_blocks_opponent_five() {
        let board = board_with(
            15,
            &[
                (2, 5, Player::First),
                (3, 5, Player::First),
                (4, 5, Player::First),
                (5, 5, Player::First),
                (1, 5, Player::Second),
            ],
        );
        let pos = calculate_move(BotType::Blocker, &input(board, Player::Second));
        assert_eq!(pos, Some(Position::new(6, 5)));
    }

    #[test]
    fn test_blocker_blocks_open_three() {
        let board = board_with(
            15,
            &[
                (7, 6, Player::First),
                (7, 7, Player::First),
                (7, 8, Player::First),
            ],
        );
        let pos = calculate_move(BotType::Blocker, &input(board, Player::Second)).unwrap();
        assert!(pos == Position::new(7, 5) || pos == Position::new(7, 9));
    }

    #[test]
    fn test_bot_does_not_mutate_input_board() {
        let board = board_with(15, &[(7, 7, Player::First), (7, 8, Player::First)]);
        let bot_input = input(board.clone(), Player::Second);
        calculate_move(BotType::Blocker, &bot_input);
        assert_eq!(bot_input.board, board);
    }
}
