use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Fixed parameters of the game.
///
/// The defaults describe the real device: a 5x5 matrix driven by a 50 ms
/// heartbeat. Everything downstream derives its timing from these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Milliseconds between scheduler heartbeats.
    pub heartbeat_ms: u32,
    /// Largest valid x coordinate (inclusive).
    pub edge_x: i32,
    /// Largest valid y coordinate (inclusive).
    pub edge_y: i32,
    /// Snake moves per second.
    pub snake_speed: f32,
    /// Full egg brightness sweeps per second.
    pub egg_speed: f32,
    /// Granularity of the egg brightness sweep.
    pub egg_steps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            heartbeat_ms: 50,
            edge_x: 4,
            edge_y: 4,
            snake_speed: 4.0,
            egg_speed: 1.0,
            egg_steps: 20,
        }
    }
}

impl GameConfig {
    /// Interval between snake moves, in fractional milliseconds.
    pub fn move_interval_ms(&self) -> f32 {
        1000.0 / self.snake_speed
    }

    /// Per-heartbeat change in egg brightness.
    pub fn egg_step(&self) -> f32 {
        self.egg_speed * self.heartbeat_ms as f32 * self.egg_steps as f32 / 1000.0
    }

    /// Bounds of the play field.
    pub fn grid(&self) -> Grid {
        Grid::new(self.edge_x, self.edge_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.heartbeat_ms, 50);
        assert_eq!(config.edge_x, 4);
        assert_eq!(config.edge_y, 4);
        assert_eq!(config.snake_speed, 4.0);
        assert_eq!(config.egg_speed, 1.0);
        assert_eq!(config.egg_steps, 20);
    }

    #[test]
    fn test_derived_timings() {
        let config = GameConfig::default();
        assert_eq!(config.move_interval_ms(), 250.0);
        assert_eq!(config.egg_step(), 1.0);
    }

    #[test]
    fn test_grid_matches_edges() {
        let grid = GameConfig::default().grid();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.center().x, 2);
        assert_eq!(grid.center().y, 2);
    }
}
