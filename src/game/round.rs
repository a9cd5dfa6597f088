use super::buttons::{Button, ButtonPad};
use super::config::GameConfig;
use super::egg::Egg;
use super::frame::FrameBuffer;
use super::grid::Grid;
use super::policy::MovementPolicy;
use super::rng::RandomSource;
use super::snake::Snake;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Snake and egg are live and ticking.
    Playing,
    /// Idle screen showing the final length; waits for the left button.
    RoundOver,
}

/// Everything that exists for the duration of one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub snake: Snake,
    pub egg: Egg,
    pub phase: RoundPhase,
    pub grid: Grid,
}

impl RoundState {
    /// Body length reported on the idle screen.
    pub fn length(&self) -> usize {
        self.snake.len()
    }

    /// Compose a fresh frame: snake first, egg second, so an egg under
    /// the head takes the shared pixel.
    pub fn render_frame(&self) -> FrameBuffer {
        let mut frame = FrameBuffer::new(&self.grid);
        self.snake.render(&mut frame);
        self.egg.render(&mut frame);
        frame
    }
}

/// What one heartbeat produced; the caller maps these onto sound and
/// session stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// The head landed on the egg; growth is pending and a new egg has
    /// been laid.
    pub egg_eaten: bool,
    /// The round just ended with this final body length.
    pub round_ended: Option<usize>,
}

/// Drives round after round: owns the fixed configuration, the movement
/// policy, and the random source.
pub struct GameEngine {
    config: GameConfig,
    policy: Box<dyn MovementPolicy>,
    rng: Box<dyn RandomSource>,
}

impl GameEngine {
    pub fn new(
        config: GameConfig,
        policy: Box<dyn MovementPolicy>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            policy,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Name of the active movement policy, for the UI.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Fresh round: a one-segment snake at the center and a new egg.
    pub fn reset(&mut self) -> RoundState {
        let grid = self.config.grid();
        RoundState {
            snake: Snake::new(&self.config, self.rng.as_mut()),
            egg: Egg::spawn(&grid, &self.config, self.rng.as_mut()),
            phase: RoundPhase::Playing,
            grid,
        }
    }

    /// Advance the session by one heartbeat.
    pub fn tick(&mut self, state: &mut RoundState, pad: &mut ButtonPad) -> TickEvents {
        let mut events = TickEvents::default();

        match state.phase {
            RoundPhase::Playing => {
                // A terminal flag raised last heartbeat ends the round now,
                // after its final frame has been on screen once.
                if state.snake.terminated() {
                    state.phase = RoundPhase::RoundOver;
                    events.round_ended = Some(state.snake.len());
                    return events;
                }

                state.snake.tick(pad, self.policy.as_ref(), &state.grid);

                if state.snake.head() == state.egg.position {
                    state.snake.eaten_egg = true;
                    state.egg = Egg::spawn(&state.grid, &self.config, self.rng.as_mut());
                    events.egg_eaten = true;
                }

                state.egg.tick();
            }
            RoundPhase::RoundOver => {
                if pad.take(Button::Left) {
                    *state = self.reset();
                }
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use crate::game::grid::Position;
    use crate::game::policy::{Autopilot, WallBounce};
    use crate::game::rng::testing::ScriptedRandom;

    fn engine(policy: Box<dyn MovementPolicy>, script: &[u32]) -> GameEngine {
        GameEngine::new(
            GameConfig::default(),
            policy,
            Box::new(ScriptedRandom::new(script)),
        )
    }

    #[test]
    fn test_reset_builds_a_fresh_round() {
        let mut engine = engine(Box::new(Autopilot), &[0, 3, 1]);
        let state = engine.reset();
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.snake.segments, vec![Position::new(2, 2)]);
        assert_eq!(state.snake.direction, Direction::East);
        assert_eq!(state.egg.position, Position::new(3, 1));
        assert_eq!(state.egg.brightness, 9.0);
        assert_eq!(engine.policy_name(), "autopilot");
    }

    #[test]
    fn test_egg_pulses_while_the_snake_waits() {
        let mut engine = engine(Box::new(Autopilot), &[0, 3, 1]);
        let mut state = engine.reset();
        let mut pad = ButtonPad::new();
        for _ in 0..3 {
            engine.tick(&mut state, &mut pad);
        }
        assert_eq!(state.egg.brightness, 6.0);
        assert_eq!(state.snake.head(), Position::new(2, 2));
    }

    #[test]
    fn test_eating_relays_the_egg_and_grows() {
        let config = GameConfig::default();
        let mut engine = engine(Box::new(Autopilot), &[0, 3, 1, 4, 0]);
        let mut state = engine.reset();
        let mut pad = ButtonPad::new();

        state.snake = Snake::with_segments(vec![Position::new(1, 2)], Direction::East, &config);
        state.snake.wait_ms = 0.0;
        state.egg = Egg::at(Position::new(2, 2), &config);

        let events = engine.tick(&mut state, &mut pad);
        assert!(events.egg_eaten);
        assert!(state.snake.eaten_egg);
        assert_eq!(state.egg.position, Position::new(4, 0));
        assert_eq!(state.egg.brightness, 8.0);

        state.snake.wait_ms = 0.0;
        let events = engine.tick(&mut state, &mut pad);
        assert!(!events.egg_eaten);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_respawn_under_the_head_is_eaten_without_moving() {
        // The relay draw may land on the head cell; the next heartbeat
        // then eats it in place. Growth is still a single segment because
        // the pending flag is a bool, not a counter.
        let config = GameConfig::default();
        let mut engine = engine(Box::new(Autopilot), &[0, 3, 1, 2, 2, 0, 0]);
        let mut state = engine.reset();
        let mut pad = ButtonPad::new();

        state.snake = Snake::with_segments(vec![Position::new(1, 2)], Direction::East, &config);
        state.snake.wait_ms = 0.0;
        state.egg = Egg::at(Position::new(2, 2), &config);

        let events = engine.tick(&mut state, &mut pad);
        assert!(events.egg_eaten);
        assert_eq!(state.egg.position, Position::new(2, 2));

        let events = engine.tick(&mut state, &mut pad);
        assert!(events.egg_eaten);
        assert_eq!(state.egg.position, Position::new(0, 0));
        assert_eq!(state.snake.head(), Position::new(2, 2));

        state.snake.wait_ms = 0.0;
        engine.tick(&mut state, &mut pad);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_terminal_flag_gets_one_more_frame() {
        let config = GameConfig::default();
        let mut engine = engine(Box::new(WallBounce), &[0, 3, 1]);
        let mut state = engine.reset();
        let mut pad = ButtonPad::new();

        state.snake = Snake::with_segments(
            vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)],
            Direction::West,
            &config,
        );
        state.snake.wait_ms = 0.0;
        state.egg = Egg::at(Position::new(0, 0), &config);

        let events = engine.tick(&mut state, &mut pad);
        assert!(state.snake.eaten_itself);
        assert_eq!(events.round_ended, None);
        assert_eq!(state.phase, RoundPhase::Playing);

        let events = engine.tick(&mut state, &mut pad);
        assert_eq!(events.round_ended, Some(3));
        assert_eq!(state.phase, RoundPhase::RoundOver);
    }

    #[test]
    fn test_round_over_freezes_the_board() {
        let mut engine = engine(Box::new(Autopilot), &[0, 3, 1]);
        let mut state = engine.reset();
        let mut pad = ButtonPad::new();

        state.snake.dead = true;
        engine.tick(&mut state, &mut pad);
        assert_eq!(state.phase, RoundPhase::RoundOver);

        let frozen = state.clone();
        for _ in 0..10 {
            let events = engine.tick(&mut state, &mut pad);
            assert_eq!(events, TickEvents::default());
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_left_button_starts_a_new_round() {
        let mut engine = engine(Box::new(Autopilot), &[0, 3, 1, 2, 2, 0]);
        let mut state = engine.reset();
        let mut pad = ButtonPad::new();

        state.snake.dead = true;
        engine.tick(&mut state, &mut pad);
        assert_eq!(state.phase, RoundPhase::RoundOver);

        pad.press(Button::Left);
        engine.tick(&mut state, &mut pad);
        assert_eq!(state.phase, RoundPhase::Playing);
        assert_eq!(state.snake.segments, vec![Position::new(2, 2)]);
        assert_eq!(state.snake.direction, Direction::West);
        assert_eq!(state.egg.position, Position::new(2, 0));
        assert!(!state.snake.terminated());
    }

    #[test]
    fn test_right_button_does_not_restart() {
        let mut engine = engine(Box::new(Autopilot), &[0, 3, 1]);
        let mut state = engine.reset();
        let mut pad = ButtonPad::new();

        state.snake.dead = true;
        engine.tick(&mut state, &mut pad);

        pad.press(Button::Right);
        engine.tick(&mut state, &mut pad);
        assert_eq!(state.phase, RoundPhase::RoundOver);
        // The press is not drained either; it stays latched for the next
        // round's first move.
        assert!(pad.take(Button::Right));
    }

    #[test]
    fn test_render_frame_layers_egg_over_snake() {
        let config = GameConfig::default();
        let mut engine = engine(Box::new(Autopilot), &[0, 3, 1]);
        let mut state = engine.reset();

        state.egg = Egg::at(state.snake.head(), &config);
        state.egg.brightness = 4.0;
        let frame = state.render_frame();
        assert_eq!(frame.pixel(2, 2), 4);
    }
}
