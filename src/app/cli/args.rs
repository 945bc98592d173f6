//! CLI arguments structure
//!
//! The binary reads SQL from files or stdin, strips comments and writes the
//! cleaned text to stdout or a file. Logging flags mirror the library's
//! logging formats.

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "sqlstrip")]
#[command(about = "Strip comments from SQL source files")]
#[command(version)]
pub struct Args {
    /// SQL files to process (reads stdin when empty)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with status 1 if any input is not already in stripped form;
    /// writes nothing
    #[arg(long = "check", conflicts_with = "output")]
    pub check: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Resolve color output from flags and TTY detection.
    pub fn use_color(&self) -> bool {
        (self.color || std::io::stderr().is_terminal()) && !self.no_color
    }
}
