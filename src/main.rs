use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aquarium::app::App;
use aquarium::model::config::AppConfig;
use aquarium::model::world::World;
use aquarium::ui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Tick budget for headless runs
    #[arg(long, default_value_t = 1000)]
    ticks: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();
    let config = AppConfig::load(&args.config);

    match args.mode {
        Mode::Headless => {
            let mut world = World::new(config.clone());
            let elapsed = 1.0 / config.target_fps.max(1) as f64;
            for _ in 0..args.ticks {
                world.update(config.world.width, config.world.height, elapsed);
            }
            for creature in &world.creatures {
                println!(
                    "{}: pos=({:.1}, {:.1}) health={:.1} eaten={}",
                    creature.name,
                    creature.position.x,
                    creature.position.y,
                    creature.health.current,
                    creature.food_eaten
                );
            }
        }
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config);
            let res = app.run(&mut tui);

            tui.exit()?;
            res?;
        }
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    // The TUI owns stdout, so logs go to a file.
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("aquarium.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
