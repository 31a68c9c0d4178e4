use anyhow::Result;
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Real-time grid-based Snake in the terminal")]
struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value = "15")]
    size: usize,

    /// Starting tick period in milliseconds (smaller is faster)
    #[arg(long, default_value = "300")]
    speed: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: cli.size,
        initial_speed_ms: cli.speed,
        ..Default::default()
    };

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
