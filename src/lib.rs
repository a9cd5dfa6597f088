//! Matrix Snake - the classic snake on a 5x5 LED matrix, simulated in
//! the terminal
//!
//! This library provides:
//! - Core game logic (game module): grid, snake, egg, the two movement
//!   policies, and the round state machine
//! - Terminal key mapping onto the device's two buttons (input module)
//! - TUI rendering of the matrix (render module)
//! - The speaker seam and built-in melodies (audio module)
//! - Session statistics (stats module)
//! - The interactive application loop (app module)

pub mod app;
pub mod audio;
pub mod game;
pub mod input;
pub mod render;
pub mod stats;
