use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tigers_and_goats::config::AppConfig;
use tigers_and_goats::game::Mode;
use tigers_and_goats::session::Session;
use tigers_and_goats::ui::App;

/// Play Tigers and Goats in the terminal.
#[derive(Parser)]
#[command(name = "tigers-and-goats", about = "Tigers and Goats on a 5x5 board")]
struct Cli {
    /// Player name shown in the header
    #[arg(long)]
    name: Option<String>,

    /// "two" for two players at one keyboard, "bot" to play goats against the computer
    #[arg(long)]
    mode: Option<String>,

    /// Delay before the computer's tiger move, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "tigers-and-goats.toml")]
    config: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.name {
        config.player.name = name;
    }
    if let Some(mode) = cli.mode {
        config.player.mode = Mode::from_param(&mode);
    }
    if let Some(delay) = cli.bot_delay_ms {
        config.bot.delay_ms = delay;
    }
    config.validate()?;

    let session = Session::new(&config.player.name, config.player.mode, config.bot.delay());
    log::info!(
        "starting game for {} ({})",
        session.name(),
        session.mode().label()
    );

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal, even when the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game loop")
}
