use caption_screen::app::App;
use caption_screen::engine::config::Config;
use caption_screen::ui::TuiManager;
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Full-screen rotating warning captions in the terminal
#[derive(Parser, Debug)]
#[command(name = "caption-screen", version, about)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Caption text
    #[arg(short, long)]
    text: Option<String>,

    /// Milliseconds between caption chunks
    #[arg(short, long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Color preset index (0=Warning 1=InfoScreen 2=Emergency 3=Safety 4=Evacuation)
    #[arg(short, long, value_name = "INDEX")]
    preset: Option<usize>,

    /// Font file for the large caption (TTF/OTF/TTC)
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(text) = cli.text {
        config.caption.text = text;
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.caption.interval_ms = interval_ms;
    }
    if let Some(preset) = cli.preset {
        config.caption.preset = preset;
    }
    if let Some(font) = cli.font {
        config.caption.font_path = Some(font);
    }
    config.validate()?;

    if let Some(path) = &cli.write_config {
        config.save(path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let mut app = App::from_config(&config)?;
    log::info!("starting with preset {}", config.caption.preset);

    let mut tui = TuiManager::new(config.caption.font_path.as_deref())?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

fn init_logging(path: &Path, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
