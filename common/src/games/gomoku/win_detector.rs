use super::board::Board;
use super::types::{Cell, Player, Position, WIN_LENGTH, WinningLine};

/// Horizontal, vertical, diagonal down-right, diagonal up-right.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Checks whether the stone at `pos` completes a run of five or more.
///
/// Only the four axes through `pos` are scanned, so the cost does not depend on
/// the board size. An empty or out-of-range cell never wins.
pub fn check_win(board: &Board, pos: Position) -> bool {
    check_win_with_line(board, pos).is_some()
}

pub fn check_win_with_line(board: &Board, pos: Position) -> Option<WinningLine> {
    let player = match board.get(pos)? {
        Cell::Occupied(player) => player,
        Cell::Empty => return None,
    };

    for (dr, dc) in AXES {
        let forward = count_direction(board, pos, player, dr, dc);
        let backward = count_direction(board, pos, player, -dr, -dc);

        if forward + backward + 1 >= WIN_LENGTH {
            let end = offset(pos, dr * forward as isize, dc * forward as isize)?;
            let start = offset(pos, -dr * backward as isize, -dc * backward as isize)?;
            return Some(WinningLine::new(player, start, end));
        }
    }

    None
}

fn count_direction(board: &Board, pos: Position, player: Player, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut current = pos;

    while let Some(next) = offset(current, dr, dc) {
        if board.get(next) != Some(Cell::Occupied(player)) {
            break;
        }
        count += 1;
        current = next;
    }

    count
}

fn offset(pos: Position, dr: isize, dc: isize) -> Option<Position> {
    let row = pos.row.checked_add_signed(dr)?;
    let col = pos.col.checked_add_signed(dc)?;
    Some(Position::new(row, col))
}
