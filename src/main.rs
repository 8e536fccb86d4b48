// tileshow: frame-driven slideshow interpreter, terminal edition

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use tileshow::config::Config;
use tileshow::error::{Error, Result};
use tileshow::presentation::{Deck, Presentation};
use tileshow::ui::theme::DEFAULT_PALETTE;
use tileshow::ui::{HostOptions, ImageStore, TerminalHost};

/// Present a tileshow deck in the terminal
#[derive(Debug, Parser)]
#[command(name = "tileshow", version, about)]
struct Args {
    /// Deck file: pages separated by `---` lines
    deck: PathBuf,

    /// Configuration file (defaults to <config dir>/tileshow/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Controller port to navigate with
    #[arg(short, long)]
    port: Option<u8>,

    /// Directory of `<name>.txt` image art
    #[arg(short, long)]
    images: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = tileshow::logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.input.port = port;
    }
    if let Some(images) = args.images {
        config.images = Some(images);
    }

    let source = fs::read_to_string(&args.deck).map_err(|source| Error::Deck {
        path: args.deck.clone(),
        source,
    })?;
    let deck = Deck::parse(&source);
    info!(path = %args.deck.display(), pages = deck.len(), "deck loaded");

    let images = match &config.images {
        Some(dir) => ImageStore::load_dir(dir)?,
        None => ImageStore::new(),
    };

    let mut palette = DEFAULT_PALETTE.to_vec();
    palette.extend(config.palette_colours()?);

    let title = args
        .deck
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tileshow".to_string());
    let options = HostOptions {
        columns: config.display.columns,
        rows: config.display.rows,
        fps: config.display.fps,
        title,
        palette,
    };

    // Set up terminal
    enable_raw_mode().map_err(|e| Error::terminal(format!("raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut host = TerminalHost::new(terminal, options, images);
    let mut presentation = Presentation::new(deck, config.presentation_options());
    presentation.run(&mut host);

    // Restore terminal
    let terminal = host.terminal_mut();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
