use super::config::GameConfig;
use super::frame::{FrameBuffer, MAX_BRIGHTNESS};
use super::grid::{Grid, Position};
use super::rng::RandomSource;

/// Which way the egg's brightness is currently sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggPhase {
    /// Dimming toward dark.
    Waning,
    /// Brightening toward full.
    Waxing,
}

/// The consumable target: a single cell pulsing between dark and full
/// brightness so it stands out from the snake's steady body.
#[derive(Debug, Clone, PartialEq)]
pub struct Egg {
    pub position: Position,
    /// Fractional brightness in `0.0..=9.0`; truncated when drawn.
    pub brightness: f32,
    pub phase: EggPhase,
    step: f32,
}

impl Egg {
    /// Fresh egg at a uniformly random cell, fully bright and waning.
    pub fn spawn(grid: &Grid, config: &GameConfig, rng: &mut dyn RandomSource) -> Self {
        Self::at(grid.random_cell(rng), config)
    }

    /// Fresh egg at a fixed cell.
    pub fn at(position: Position, config: &GameConfig) -> Self {
        Self {
            position,
            brightness: MAX_BRIGHTNESS as f32,
            phase: EggPhase::Waning,
            step: config.egg_step(),
        }
    }

    /// Advance the brightness sweep by one heartbeat, reversing with a
    /// clamp at either end.
    pub fn tick(&mut self) {
        match self.phase {
            EggPhase::Waning => self.brightness -= self.step,
            EggPhase::Waxing => self.brightness += self.step,
        }
        if self.brightness <= 0.0 {
            self.phase = EggPhase::Waxing;
            self.brightness = 0.0;
        }
        if self.brightness >= MAX_BRIGHTNESS as f32 {
            self.phase = EggPhase::Waning;
            self.brightness = MAX_BRIGHTNESS as f32;
        }
    }

    /// Draw onto the frame, truncating to a whole brightness level.
    pub fn render(&self, frame: &mut FrameBuffer) {
        frame.set_pixel(self.position, self.brightness as u8);
    }
}
