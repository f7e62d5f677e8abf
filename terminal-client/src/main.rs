mod app;
mod config;
mod input;
mod renderer;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use common::{GameMode, GameSession, RandomBot, SessionRng, log, logger};

use app::TerminalApp;
use config::get_config_manager;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Two humans at one terminal
    Pvp,
    /// Human against the random AI
    Pve,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Pve => GameMode::PlayerVsBot,
        }
    }
}

#[derive(Parser)]
#[command(name = "connect_k_terminal", about = "Five in a row on a 12x12 board")]
struct Args {
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Seed for the AI; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn prompt_for_mode(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<GameMode>> {
    loop {
        writeln!(output, "1) {}", GameMode::PlayerVsPlayer)?;
        writeln!(output, "2) {}", GameMode::PlayerVsBot)?;
        write!(output, "Select mode: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim() {
            "1" => return Ok(Some(GameMode::PlayerVsPlayer)),
            "2" => return Ok(Some(GameMode::PlayerVsBot)),
            other => writeln!(output, "Unknown choice '{}'", other)?,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Terminal".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    log!("Loaded config: {:?}", config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mode = match args.mode.map(GameMode::from) {
        Some(mode) => mode,
        None => match prompt_for_mode(&mut input, &mut output)? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };

    if config.last_mode != Some(mode) {
        config.last_mode = Some(mode);
        if let Err(e) = config_manager.set_config(&config) {
            log!("Failed to save config: {}", e);
        }
    }

    let rng = match args.seed.or(config.bot_seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let bot = RandomBot::new(rng);
    log!("Starting in {} mode, AI seed {}", mode, bot.seed());

    let session = GameSession::new(mode, config.bot_player, Box::new(bot));
    let mut app = TerminalApp::new(
        session,
        input,
        output,
        Duration::from_millis(config.bot_delay_ms),
    );
    app.run()?;

    log!("Bye");
    Ok(())
}
