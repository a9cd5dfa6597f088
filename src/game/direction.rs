/// Compass heading of the snake, index-encoded in clockwise rotation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// All directions in index order (`East` = 0 through `North` = 3).
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Direction for an arbitrary index, wrapping modulo 4.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Index of this direction in the 0..4 encoding.
    pub fn index(self) -> u32 {
        match self {
            Direction::East => 0,
            Direction::South => 1,
            Direction::West => 2,
            Direction::North => 3,
        }
    }

    /// Quarter turn clockwise on the display (y grows downward).
    pub fn clockwise(self) -> Self {
        match self {
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::North => Direction::East,
        }
    }

    /// Quarter turn anti-clockwise; inverse of [`clockwise`](Self::clockwise).
    pub fn anti_clockwise(self) -> Self {
        match self {
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
            Direction::North => Direction::West,
        }
    }

    /// Unit (dx, dy) step for this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_cycle() {
        assert_eq!(Direction::East.clockwise(), Direction::South);
        assert_eq!(Direction::South.clockwise(), Direction::West);
        assert_eq!(Direction::West.clockwise(), Direction::North);
        assert_eq!(Direction::North.clockwise(), Direction::East);
    }

    #[test]
    fn test_rotations_are_inverses() {
        for direction in Direction::ALL {
            assert_eq!(direction.clockwise().anti_clockwise(), direction);
            assert_eq!(direction.anti_clockwise().clockwise(), direction);
        }
    }

    #[test]
    fn test_clockwise_advances_index() {
        for direction in Direction::ALL {
            assert_eq!(direction.clockwise().index(), (direction.index() + 1) % 4);
        }
    }

    #[test]
    fn test_deltas() {
        assert_eq!(Direction::East.delta(), (1, 0));
        assert_eq!(Direction::South.delta(), (0, 1));
        assert_eq!(Direction::West.delta(), (-1, 0));
        assert_eq!(Direction::North.delta(), (0, -1));
    }

    #[test]
    fn test_index_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_index(direction.index()), direction);
        }
        assert_eq!(Direction::from_index(5), Direction::South);
    }
}
