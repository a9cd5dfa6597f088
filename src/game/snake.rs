use super::buttons::{Button, ButtonPad};
use super::config::GameConfig;
use super::direction::Direction;
use super::frame::{FrameBuffer, MAX_BRIGHTNESS};
use super::grid::{Grid, Position};
use super::policy::MovementPolicy;
use super::rng::RandomSource;

/// Brightness of body cells; the head is drawn at full brightness.
pub const BODY_BRIGHTNESS: u8 = 7;

/// The snake: an ordered body of cells plus its movement countdown.
///
/// `segments[0]` is the tail and the last element is the head. The body
/// is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub segments: Vec<Position>,
    pub direction: Direction,
    /// Fractional milliseconds left until the next move; may dip below
    /// zero when the move interval is not a multiple of the heartbeat.
    pub wait_ms: f32,
    /// Growth owed from a consumed egg; spent by the next move.
    pub eaten_egg: bool,
    /// Terminal: boxed in with no open heading left.
    pub dead: bool,
    /// Terminal: the head landed on the body.
    pub eaten_itself: bool,
    move_interval_ms: f32,
    heartbeat_ms: f32,
}

impl Snake {
    /// One-segment snake at the grid center with a random heading.
    pub fn new(config: &GameConfig, rng: &mut dyn RandomSource) -> Self {
        let heading = Direction::from_index(rng.next_in_range(4));
        Self::with_segments(vec![config.grid().center()], heading, config)
    }

    /// Snake with an explicit body; the last element is the head.
    pub fn with_segments(
        segments: Vec<Position>,
        direction: Direction,
        config: &GameConfig,
    ) -> Self {
        Self {
            segments,
            direction,
            wait_ms: config.move_interval_ms(),
            eaten_egg: false,
            dead: false,
            eaten_itself: false,
            move_interval_ms: config.move_interval_ms(),
            heartbeat_ms: config.heartbeat_ms as f32,
        }
    }

    /// Head cell.
    pub fn head(&self) -> Position {
        *self.segments.last().unwrap()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True once either terminal flag is set.
    pub fn terminated(&self) -> bool {
        self.dead || self.eaten_itself
    }

    /// Whether `position` hits the body, not counting the head cell.
    ///
    /// The body is matched against the first occurrence of `position`, so
    /// a head that overlaps an older segment does count as a hit.
    pub fn collides_with_body(&self, position: Position) -> bool {
        match self.segments.iter().position(|&cell| cell == position) {
            Some(index) => index != self.segments.len() - 1,
            None => false,
        }
    }

    /// One heartbeat: move when the countdown has run out, otherwise keep
    /// counting down. The countdown resets only on a move, so the full
    /// cycle is one heartbeat longer than `move_interval_ms`.
    pub fn tick(&mut self, pad: &mut ButtonPad, policy: &dyn MovementPolicy, grid: &Grid) {
        if self.wait_ms <= 0.0 {
            self.steer(pad);
            policy.step(self, grid);
            self.wait_ms = self.move_interval_ms;
        } else {
            self.wait_ms -= self.heartbeat_ms;
        }
    }

    /// Consume the latched button edges: left turns anti-clockwise, right
    /// turns clockwise. At most one rotation is applied, and right wins a
    /// simultaneous press.
    fn steer(&mut self, pad: &mut ButtonPad) {
        let left = pad.take(Button::Left);
        let right = pad.take(Button::Right);
        if right {
            self.direction = self.direction.clockwise();
        } else if left {
            self.direction = self.direction.anti_clockwise();
        }
    }

    /// Commit a resolved move: append the new head and drop the tail
    /// unless growth is pending.
    pub fn apply_move(&mut self, new_head: Position) {
        self.segments.push(new_head);
        if self.eaten_egg {
            self.eaten_egg = false;
        } else {
            self.segments.remove(0);
        }
    }

    /// Draw the head at full brightness, then the body cells. On an
    /// overlap the body shade wins.
    pub fn render(&self, frame: &mut FrameBuffer) {
        frame.set_pixel(self.head(), MAX_BRIGHTNESS);
        let last = self.segments.len() - 1;
        for &cell in &self.segments[..last] {
            frame.set_pixel(cell, BODY_BRIGHTNESS);
        }
    }
}
