mod bot_scheduler;
mod config;
mod ui;

use std::time::Duration;

use bot_scheduler::BotScheduler;
use clap::Parser;
use config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
use eframe::egui;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Strategy, TicTacToeGameState};
use tictactoe_common::{log, logger};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// AI level for the first round: random or minimax
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Seed for the random AI, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Print the default config as YAML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);

    if args.print_default_config {
        println!("{}", config_manager.serialize(&Config::default())?);
        return Ok(());
    }

    let config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config from {}: {}. Using defaults", args.config, e);
        Config::default()
    });

    let strategy = args.strategy.unwrap_or(config.game.strategy);
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting tic-tac-toe: strategy={}, bot_delay_ms={}, seed={}",
        strategy,
        config.game.bot_delay_ms,
        rng.seed()
    );

    let scheduler = BotScheduler::new(Duration::from_millis(config.game.bot_delay_ms))?;
    let app = TicTacToeApp::new(TicTacToeGameState::new(strategy), rng, scheduler, config.theme);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 620.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    log!("Client shut down");

    Ok(())
}
