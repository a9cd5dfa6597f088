//! Core game logic module for the matrix snake
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. It advances in fixed heartbeats and is deterministic for
//! a fixed seed and input sequence.

pub mod buttons;
pub mod config;
pub mod direction;
pub mod egg;
pub mod frame;
pub mod grid;
pub mod policy;
pub mod rng;
pub mod round;
pub mod snake;

// Re-export commonly used types
pub use buttons::{Button, ButtonPad};
pub use config::GameConfig;
pub use direction::Direction;
pub use egg::{Egg, EggPhase};
pub use frame::{FrameBuffer, MAX_BRIGHTNESS};
pub use grid::{Grid, Position};
pub use policy::{Autopilot, MovementPolicy, WallBounce};
pub use rng::{RandomSource, SeededRandom};
pub use round::{GameEngine, RoundPhase, RoundState, TickEvents};
pub use snake::{Snake, BODY_BRIGHTNESS};
