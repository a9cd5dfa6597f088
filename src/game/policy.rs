use super::direction::Direction;
use super::grid::{Grid, Position};
use super::snake::Snake;

/// How the snake resolves one move against the walls and its own body.
/// The two built-in policies give the game two distinct personalities,
/// selected at startup.
pub trait MovementPolicy {
    /// Resolve and commit one move for the snake on the given grid.
    fn step(&self, snake: &mut Snake, grid: &Grid);

    /// Short name shown in the UI.
    fn name(&self) -> &'static str;
}

/// Steers around obstacles by itself: tries straight ahead, then a
/// clockwise turn, then an anti-clockwise turn, and dies only when all
/// three are blocked.
#[derive(Debug, Default, Clone, Copy)]
pub struct Autopilot;

impl MovementPolicy for Autopilot {
    fn step(&self, snake: &mut Snake, grid: &Grid) {
        let head = snake.head();

        // The straight-ahead branch tests self-collision on the current
        // head cell, not the candidate. A head that is clear may move onto
        // its own body; the overlap then forces a turn one move later.
        let ahead = head.moved_in(snake.direction);
        if grid.contains(ahead) && !snake.collides_with_body(head) {
            snake.apply_move(ahead);
            return;
        }

        let clockwise = snake.direction.clockwise();
        let candidate = head.moved_in(clockwise);
        if grid.contains(candidate) && !snake.collides_with_body(candidate) {
            snake.direction = clockwise;
            snake.apply_move(candidate);
            return;
        }

        let anti_clockwise = snake.direction.anti_clockwise();
        let candidate = head.moved_in(anti_clockwise);
        if grid.contains(candidate) && !snake.collides_with_body(candidate) {
            snake.direction = anti_clockwise;
            snake.apply_move(candidate);
            return;
        }

        // Boxed in: the snake stays put and the round is over.
        snake.dead = true;
    }

    fn name(&self) -> &'static str {
        "autopilot"
    }
}

/// Never avoids anything: bounces off walls and corners along a fixed
/// circuit and merely flags a self-collision after making the move.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallBounce;

impl WallBounce {
    /// Forced heading on the four corner cells, checked before the edge
    /// rules and regardless of the current heading.
    fn corner_override(head: Position, grid: &Grid) -> Option<Direction> {
        let (edge_x, edge_y) = (grid.edge_x(), grid.edge_y());
        if head == Position::new(edge_x, 0) {
            Some(Direction::South)
        } else if head == Position::new(edge_x, edge_y) {
            Some(Direction::West)
        } else if head == Position::new(0, edge_y) {
            Some(Direction::North)
        } else if head == Position::new(0, 0) {
            Some(Direction::East)
        } else {
            None
        }
    }

    /// Clockwise redirect when the snake is on an edge and headed off it.
    fn edge_override(head: Position, direction: Direction, grid: &Grid) -> Option<Direction> {
        match direction {
            Direction::East if head.x == grid.edge_x() => Some(Direction::South),
            Direction::South if head.y == grid.edge_y() => Some(Direction::West),
            Direction::West if head.x == 0 => Some(Direction::North),
            Direction::North if head.y == 0 => Some(Direction::East),
            _ => None,
        }
    }
}

impl MovementPolicy for WallBounce {
    fn step(&self, snake: &mut Snake, grid: &Grid) {
        let head = snake.head();
        if let Some(forced) = Self::corner_override(head, grid)
            .or_else(|| Self::edge_override(head, snake.direction, grid))
        {
            snake.direction = forced;
        }

        snake.apply_move(head.moved_in(snake.direction));

        // The move has already happened; the flag ends the round on the
        // next heartbeat.
        if snake.collides_with_body(snake.head()) {
            snake.eaten_itself = true;
        }
    }

    fn name(&self) -> &'static str {
        "bounce"
    }
}
