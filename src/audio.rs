//! The speaker seam: tone data for the two built-in melodies and a
//! fire-and-forget playback trait.

use std::io::{self, Write};

/// One note of a melody.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency: f32,
    pub duration_ms: u32,
}

/// Short C6 blip played when the egg is eaten.
pub const EGG_CHIME: [Tone; 1] = [Tone {
    frequency: 1046.5,
    duration_ms: 60,
}];

/// Descending run played once when a round ends.
pub const POWER_DOWN: [Tone; 4] = [
    Tone {
        frequency: 392.0,
        duration_ms: 120,
    },
    Tone {
        frequency: 329.63,
        duration_ms: 120,
    },
    Tone {
        frequency: 261.63,
        duration_ms: 120,
    },
    Tone {
        frequency: 196.0,
        duration_ms: 180,
    },
];

/// Total length of a melody in milliseconds.
pub fn melody_duration_ms(melody: &[Tone]) -> u32 {
    melody.iter().map(|tone| tone.duration_ms).sum()
}

/// Playback device. `play` must return immediately; the game loop never
/// waits for a melody to finish.
pub trait Speaker {
    fn play(&mut self, melody: &[Tone]);
}

/// Rings the terminal bell once per melody. Pitch is lost, but eating
/// and dying stay audible.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Speaker for TerminalBell {
    fn play(&mut self, melody: &[Tone]) {
        if melody.is_empty() {
            return;
        }
        // Sound is best effort; write errors are dropped.
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// Discards every melody; used in tests and headless runs.
#[derive(Debug, Default)]
pub struct Muted;

impl Speaker for Muted {
    fn play(&mut self, _melody: &[Tone]) {}
}
