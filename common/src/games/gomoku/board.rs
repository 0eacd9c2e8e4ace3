use super::types::{Cell, MIN_BOARD_SIZE, MoveError, Player, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
    occupied: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, String> {
        if size < MIN_BOARD_SIZE {
            return Err(format!(
                "Board size must be at least {}, got {}",
                MIN_BOARD_SIZE, size
            ));
        }

        Ok(Self {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
            occupied: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.size * self.size
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Claims an empty cell for `player`. Nothing changes when the move is rejected.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        let size = self.size;
        let cell = self
            .cells
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .ok_or(MoveError::InvalidCoordinate {
                row: pos.row as i64,
                col: pos.col as i64,
                size,
            })?;

        if !cell.is_empty() {
            return Err(MoveError::CellOccupied(pos));
        }

        *cell = Cell::Occupied(player);
        self.occupied += 1;
        Ok(())
    }

    /// Maps coordinates that come straight from input events onto a cell.
    pub fn resolve(&self, row: i64, col: i64) -> Result<Position, MoveError> {
        Position::from_signed(row, col)
            .filter(|pos| self.in_bounds(*pos))
            .ok_or(MoveError::InvalidCoordinate {
                row,
                col,
                size: self.size,
            })
    }

    pub fn first_empty(&self) -> Option<Position> {
        self.empty_cells().next()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_empty())
                .map(move |(col, _)| Position::new(row, col))
        })
    }

    pub(crate) fn set_unchecked(&mut self, pos: Position, cell: Cell) {
        let previous = self.cells[pos.row][pos.col];
        match (previous.is_empty(), cell.is_empty()) {
            (true, false) => self.occupied += 1,
            (false, true) => self.occupied -= 1,
            _ => {}
        }
        self.cells[pos.row][pos.col] = cell;
    }
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    board.empty_cells().collect()
}
