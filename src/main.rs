//! Inkdown - convert markdown to HTML.
//!
//! This binary provides the CLI interface to the inkdown library,
//! converting files or stdin and writing to stdout or a file.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use inkdown_config::Config;
use inkdown_core::{Options, Result};
use inkdown_parser::Converter;
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Inkdown v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    env_logger::Builder::new()
        .filter_level(level_filter(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let options = load_options(cli)?;
    debug!("Options: {:?}", options);
    let converter = Converter::with_options(options);

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => {
            info!("Writing to {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        writeln!(out, "{}", converter.convert(&source))?;
    } else {
        for path in &cli.files {
            info!("Converting {}", path.display());
            let source = std::fs::read_to_string(path)?;
            writeln!(out, "{}", converter.convert(&source))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load configuration, apply any override, then the command-line flags.
fn load_options(cli: &Cli) -> Result<Options> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    if cli.config.is_some() {
        debug!("Merged config override");
    }

    let mut options = config.options();
    cli.apply_flags(&mut options);
    Ok(options)
}
