use super::direction::Direction;
use super::rng::RandomSource;

/// A cell coordinate on the matrix. The origin is the top-left corner,
/// with x growing right and y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position offset by (dx, dy).
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Cell one step away in the given direction.
    pub fn moved_in(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Play-field bounds with inclusive edges: a cell is on the grid iff
/// `0 <= x <= edge_x` and `0 <= y <= edge_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    edge_x: i32,
    edge_y: i32,
}

impl Grid {
    pub fn new(edge_x: i32, edge_y: i32) -> Self {
        Self { edge_x, edge_y }
    }

    /// Largest valid x coordinate.
    pub fn edge_x(&self) -> i32 {
        self.edge_x
    }

    /// Largest valid y coordinate.
    pub fn edge_y(&self) -> i32 {
        self.edge_y
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        (self.edge_x + 1) as usize
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        (self.edge_y + 1) as usize
    }

    /// Whether the position lies on the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x <= self.edge_x && position.y >= 0 && position.y <= self.edge_y
    }

    /// Center cell, rounded toward the origin on even spans.
    pub fn center(&self) -> Position {
        Position::new(self.edge_x / 2, self.edge_y / 2)
    }

    /// Uniformly random cell. May be any in-bounds cell, including ones
    /// that are currently occupied.
    pub fn random_cell(&self, rng: &mut dyn RandomSource) -> Position {
        let x = rng.next_in_range(self.width() as u32) as i32;
        let y = rng.next_in_range(self.height() as u32) as i32;
        Position::new(x, y)
    }
}
