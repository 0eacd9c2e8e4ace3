use super::types::Position;

pub const DEFAULT_MARGIN: f32 = 30.0;
pub const DEFAULT_CELL_PITCH: f32 = 30.0;
pub const DEFAULT_PIECE_RADIUS: f32 = 13.0;

/// Geometry shared by renderers that draw stones on grid intersections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub margin: f32,
    pub pitch: f32,
    pub piece_radius: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            pitch: DEFAULT_CELL_PITCH,
            piece_radius: DEFAULT_PIECE_RADIUS,
        }
    }
}

impl BoardLayout {
    /// Width and height of a square canvas that fits `board_size` lines.
    pub fn canvas_size(&self, board_size: usize) -> f32 {
        self.margin * 2.0 + self.pitch * board_size.saturating_sub(1) as f32
    }

    pub fn cell_center(&self, pos: Position) -> (f32, f32) {
        (
            self.margin + pos.col as f32 * self.pitch,
            self.margin + pos.row as f32 * self.pitch,
        )
    }

    /// Nearest intersection to a pointer position, `None` when the pointer is
    /// more than half a pitch outside the grid.
    pub fn cell_at(&self, x: f32, y: f32, board_size: usize) -> Option<Position> {
        let col = self.axis_index(x, board_size)?;
        let row = self.axis_index(y, board_size)?;
        Some(Position::new(row, col))
    }

    fn axis_index(&self, coord: f32, board_size: usize) -> Option<usize> {
        if !coord.is_finite() || self.pitch <= 0.0 {
            return None;
        }
        let index = ((coord - self.margin) / self.pitch).round();
        if index < 0.0 || index >= board_size as f32 {
            return None;
        }
        Some(index as usize)
    }
}
