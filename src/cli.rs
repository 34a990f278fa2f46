//! Command-line interface for inkdown.

use clap::Parser;
use inkdown_core::Options;
use std::path::PathBuf;

/// Inkdown - convert markdown to HTML.
///
/// Reads markdown from the given files (or stdin) and writes an HTML
/// fragment for each.
#[derive(Parser, Debug)]
#[command(
    name = "inkd",
    author = "Inkdown Contributors",
    version,
    about = "Convert markdown to HTML",
    after_help = "Repository: https://github.com/inkdown/inkdown-rs\n\n\
                  Examples:\n  \
                  cat README.md | inkd\n  \
                  inkd notes.md -o notes.html\n  \
                  inkd -c '[render]\nMaxDepth = 8' deep.md"
)]
pub struct Cli {
    /// Input files to convert (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Do not recognise pipe tables
    #[arg(long = "no-tables")]
    pub no_tables: bool,

    /// Do not treat four-space indented lines as code
    #[arg(long = "no-indented-code")]
    pub no_indented_code: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Switch off whatever the flags disable.
    pub fn apply_flags(&self, options: &mut Options) {
        if self.no_tables {
            options.tables = false;
        }
        if self.no_indented_code {
            options.indented_code = false;
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    use inkdown_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
