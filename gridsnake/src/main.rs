use std::path::PathBuf;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use gridsnake::food::{FoodSpawner, RandomSpawner};
use gridsnake::starter::Game;
use gridsnake::{GameError, Playing, Settings};

#[derive(Parser, Debug)]
#[command(name = "gridsnake", about = "Grid snake on a tetra window")]
struct Cli {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,
}

fn main() -> Result<(), GameError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridsnake=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let mut game = Game::new(settings);
    if cli.width.is_some() || cli.height.is_some() {
        let width = cli.width.unwrap_or(game.settings.window_width);
        let height = cli.height.unwrap_or(game.settings.window_height);
        game.set_window_size(width, height);
    }

    game.launch(|settings, layout| {
        let spawner: Box<dyn FoodSpawner> = match settings.food_seed {
            Some(seed) => Box::new(RandomSpawner::seeded(settings.grid_cell_count, seed)),
            None => Box::new(RandomSpawner::new(settings.grid_cell_count)),
        };
        Box::new(Playing::new(layout, settings.play_options(), spawner))
    })
}
