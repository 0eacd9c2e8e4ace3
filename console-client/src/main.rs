mod config;
mod console;
mod constants;
mod input;
mod renderer;
mod state;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use common::config::Validate;
use common::games::gomoku::{BOARD_SIZE_PRESETS, GameMode, GameSettings};
use common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;

use config::{Config, get_config_manager};
use console::{Console, Reply, describe_settings};
use constants::LOG_PREFIX;
use input::{HELP_TEXT, parse_side};
use renderer::ConsoleBroadcaster;
use state::SharedState;

#[derive(Parser)]
#[command(name = "gomoku", about = "Five-in-a-row in the terminal")]
struct Args {
    /// Config file, defaults to gomoku_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    size: Option<usize>,

    /// pvp or pve
    #[arg(long)]
    mode: Option<String>,

    /// black or white, used against the bot
    #[arg(long)]
    side: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written");
        return Ok(());
    }
    let config = config_manager.get_config()?;

    init_logging(&args, &config)?;

    let settings = initial_settings(&args, &config)?;
    let bot_delay = Duration::from_millis(config.game.bot_delay_ms);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_console(settings, bot_delay))
}

fn init_logging(args: &Args, config: &Config) -> Result<(), String> {
    let prefix = if args.use_log_prefix {
        Some(
            config
                .logging
                .prefix
                .clone()
                .unwrap_or_else(|| LOG_PREFIX.to_string()),
        )
    } else {
        config.logging.prefix.clone()
    };

    match config.logging.file {
        Some(ref file) => logger::init_file_logger(prefix, Path::new(file)),
        None => {
            logger::init_logger(prefix);
            Ok(())
        }
    }
}

fn initial_settings(args: &Args, config: &Config) -> Result<GameSettings, String> {
    let mut settings = config.game.to_settings();
    if let Some(size) = args.size {
        settings.board_size = size;
        if !settings.is_preset_size() {
            return Err(format!("Board size must be one of {:?}", BOARD_SIZE_PRESETS));
        }
    }
    if let Some(ref mode) = args.mode {
        settings.mode = match mode.to_ascii_lowercase().as_str() {
            "pvp" => GameMode::TwoPlayer,
            "pve" => GameMode::PlayerVsBot,
            other => return Err(format!("Unknown mode '{}', expected pvp or pve", other)),
        };
    }
    if let Some(ref side) = args.side {
        settings.human_side = parse_side(side)?;
    }
    settings.validate()?;
    Ok(settings)
}

async fn run_console(
    settings: GameSettings,
    bot_delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let shared_state = SharedState::new();
    let broadcaster = ConsoleBroadcaster::new(shared_state.clone(), true);
    let mut console = Console::new(broadcaster, shared_state, settings, bot_delay);

    println!("{}", HELP_TEXT);
    println!("Starting: {}", describe_settings(&settings));
    log!("Console started with {:?}, bot delay {:?}", settings, bot_delay);

    if let Reply::Message(message) = console.start_game() {
        println!("{}", message);
    }

    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    while let Some(line) = lines.next().await {
        let line = line?;
        match console.handle_line(&line).await {
            Reply::Message(message) => println!("{}", message),
            Reply::Silent => {}
            Reply::Quit => break,
        }
        std::io::stdout().flush()?;
    }

    log!("Console closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("gomoku").chain(extra.iter().copied()))
    }

    #[test]
    fn test_size_override_must_be_a_preset() {
        let config = Config::default();

        let settings = initial_settings(&args(&["--size", "20"]), &config).unwrap();
        assert_eq!(settings.board_size, 20);

        let err = initial_settings(&args(&["--size", "12"]), &config).unwrap_err();
        assert!(err.contains("must be one of"));
    }

    #[test]
    fn test_mode_and_side_overrides() {
        let settings = initial_settings(
            &args(&["--mode", "pve", "--side", "white"]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(settings.mode, GameMode::PlayerVsBot);
        assert_eq!(settings.human_side, common::games::gomoku::Player::Second);

        assert!(initial_settings(&args(&["--mode", "solo"]), &Config::default()).is_err());
    }
}
