//! Tracing setup for the `lockout-config` binary.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Target for events describing the loaded lockout policy.
pub const LOG_TARGET: &str = "lockout";

/// Map a configured level name to a filter. Unknown names mean `info`.
fn level_filter(level: &str) -> LevelFilter {
    let level = level.trim();
    if level.eq_ignore_ascii_case("warning") {
        return LevelFilter::WARN;
    }
    level.parse().unwrap_or(LevelFilter::INFO)
}

/// Open `path` for appending, creating it and any missing parent directories.
///
/// Earlier runs' output is kept.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Install the global subscriber described by `config`.
///
/// Output goes to stdout, and also to `config.file` when one is set. ANSI
/// colours are only used when nothing is written to a file.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let writer = match config.file.as_deref() {
        Some(path) => {
            let file = Arc::new(open_log_file(Path::new(path))?);
            BoxMakeWriter::new(std::io::stdout.and(file))
        }
        None => BoxMakeWriter::new(std::io::stdout),
    };
    install(writer, &config.level, config.file.is_none());
    Ok(())
}

/// Install a stdout-only subscriber. Used when [`init`] cannot open its file.
pub fn init_console_only(level: &str) {
    install(BoxMakeWriter::new(std::io::stdout), level, true);
}

fn install(writer: BoxMakeWriter, level: &str, ansi: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level_filter(level).into());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true),
        )
        .with(filter)
        .init();
}
