use anyhow::Result;
use clap::{Parser, ValueEnum};
use matrix_snake::app::App;
use matrix_snake::audio::TerminalBell;
use matrix_snake::game::{Autopilot, GameConfig, MovementPolicy, SeededRandom, WallBounce};

#[derive(Parser)]
#[command(name = "matrix_snake")]
#[command(version, about = "Snake on a simulated 5x5 LED matrix")]
struct Cli {
    /// How the snake resolves walls and its own body
    #[arg(long, default_value = "autopilot")]
    policy: Policy,

    /// Seed for the random source; picked at random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    /// Steers around obstacles on its own; dies only when boxed in
    Autopilot,
    /// Bounces off walls; running into itself ends the round
    Bounce,
}

impl Policy {
    fn build(self) -> Box<dyn MovementPolicy> {
        match self {
            Policy::Autopilot => Box::new(Autopilot),
            Policy::Bounce => Box::new(WallBounce),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };

    let config = GameConfig::default();
    let mut app = App::new(
        config,
        cli.policy.build(),
        Box::new(rng),
        Box::new(TerminalBell),
    );
    app.run().await
}
