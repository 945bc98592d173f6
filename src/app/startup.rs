//! Application startup
//!
//! Parses arguments, initialises logging and runs the strip over the
//! requested inputs. Stdin is used when no files are given. In `--check`
//! mode nothing is written; the exit status reports whether every input was
//! already in stripped form.

use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use crate::app::cli::Args;
use crate::core::logging::init_logging;
use crate::scanner::{strip_sql_comments, StripError, StripResult};

pub fn run() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        args.use_color(),
    ) {
        eprintln!("sqlstrip: failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run_with(&args) {
        Ok(code) => code,
        Err(e) => {
            match e.path() {
                Some(path) => log::error!("{}: {}", path.display(), e),
                None => log::error!("{}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run_with(args: &Args) -> StripResult<ExitCode> {
    let mut stripped = Vec::new();
    let mut clean = true;

    if args.files.is_empty() {
        let source = read_input(None)?;
        clean &= process(&source, "<stdin>", args.check, &mut stripped);
    } else {
        for path in &args.files {
            let source = read_input(Some(path))?;
            let label = path.display().to_string();
            clean &= process(&source, &label, args.check, &mut stripped);
        }
    }

    if args.check {
        return Ok(if clean {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let output = render_output(&stripped);
    match &args.output {
        Some(path) => fs::write(path, output).map_err(|source| StripError::Io {
            path: Some(path.clone()),
            source,
        })?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .map_err(|source| StripError::Io { path: None, source })?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Strip one input. Returns false in check mode when the input differs from
/// its stripped form.
fn process(source: &str, label: &str, check: bool, stripped: &mut Vec<String>) -> bool {
    let result = strip_sql_comments(source);
    log::debug!(
        "{}: {} chars in, {} chars out",
        label,
        source.len(),
        result.len()
    );
    if check && result != source {
        log::warn!("{}: not in stripped form", label);
        stripped.push(result);
        return false;
    }
    stripped.push(result);
    true
}

/// Concatenate per-input results, each terminated by exactly one newline.
fn render_output(parts: &[String]) -> String {
    let mut out = String::new();
    for part in parts.iter().filter(|p| !p.is_empty()) {
        out.push_str(part);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

fn read_input(path: Option<&Path>) -> StripResult<String> {
    match path {
        Some(path) => {
            let bytes = fs::read(path).map_err(|source| StripError::Io {
                path: Some(path.to_path_buf()),
                source,
            })?;
            String::from_utf8(bytes).map_err(|_| StripError::Encoding {
                path: Some(path.to_path_buf()),
            })
        }
        None => {
            let mut buf = String::new();
            match std::io::stdin().lock().read_to_string(&mut buf) {
                Ok(_) => Ok(buf),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    Err(StripError::Encoding { path: None })
                }
                Err(source) => Err(StripError::Io { path: None, source }),
            }
        }
    }
}
