mod config;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{GameMode, SearchAlgorithm};
use common::{log, log_warn, logger};
use eframe::egui;

use config::{Config, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tic_tac_toe")]
struct Args {
    /// YAML file holding the remembered mode, algorithm and move delay.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Seed for the computer's random fallback moves.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    #[arg(long, value_enum)]
    algorithm: Option<SearchAlgorithm>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config().unwrap_or_else(|e| {
        log_warn!("Using default config: {}", e);
        Config::default()
    });
    if let Some(mode) = args.mode {
        config.game.mode = mode;
    }
    if let Some(algorithm) = args.algorithm {
        config.game.algorithm = algorithm;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting with mode {:?}, algorithm {}",
        config.game.mode,
        config.game.algorithm.short_name()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 620.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(config, config_manager, rng)))),
    )?;

    log!("Window closed");
    Ok(())
}
