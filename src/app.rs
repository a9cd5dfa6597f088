//! Interactive terminal application: owns the terminal, the heartbeat
//! and render timers, and the wiring from engine events to sound and
//! session stats.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::{Speaker, EGG_CHIME, POWER_DOWN};
use crate::game::{ButtonPad, GameConfig, GameEngine, MovementPolicy, RandomSource, RoundState};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::stats::SessionStats;

pub struct App {
    engine: GameEngine,
    state: RoundState,
    pad: ButtonPad,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    speaker: Box<dyn Speaker>,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: GameConfig,
        policy: Box<dyn MovementPolicy>,
        rng: Box<dyn RandomSource>,
        speaker: Box<dyn Speaker>,
    ) -> Self {
        let mut engine = GameEngine::new(config, policy, rng);
        let state = engine.reset();

        Self {
            engine,
            state,
            pad: ButtonPad::new(),
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            speaker,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // The device heartbeat: 20 Hz at the default 50 ms
        let heartbeat = Duration::from_millis(self.engine.config().heartbeat_ms as u64);
        let mut heartbeat_timer = interval(heartbeat);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game heartbeat; the idle screen ticks too, polling for
                // a restart
                _ = heartbeat_timer.tick() => {
                    self.advance_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.state,
                            self.engine.policy_name(),
                            &self.stats,
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Button(button) => {
                    self.pad.press(button);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// One heartbeat: advance the engine and map its events onto the
    /// speaker and the session stats.
    fn advance_game(&mut self) {
        let events = self.engine.tick(&mut self.state, &mut self.pad);

        if events.egg_eaten {
            self.speaker.play(&EGG_CHIME);
        }

        if let Some(final_length) = events.round_ended {
            self.stats.on_round_over(final_length);
            self.speaker.play(&POWER_DOWN);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
