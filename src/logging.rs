//! Diagnostic logging: a file next to the config, stderr when asked.
//!
//! The report itself goes to stdout, so log output stays off that stream;
//! `-v` mirrors diagnostics to stderr without touching the report.

use crate::config::Config;
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// File name of the diagnostic log, created in the config directory.
pub const LOG_FILE: &str = "age-insight.log";

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `RUST_LOG` directives plus the level implied by `-v` counts.
pub fn build_filter(verbose: u8) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level_for(verbose).into())
}

/// Installs the global subscriber.
///
/// Returns the appender guard keeping the non-blocking file writer alive;
/// hold it for the life of the process or buffered lines are lost.
pub fn init(to_file: bool, verbose: u8) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = build_filter(verbose);

    let (file_layer, guard) = if to_file {
        match Config::dir() {
            Some(dir) => {
                let appender = tracing_appender::rolling::never(dir, LOG_FILE);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().with_writer(writer).with_ansi(false);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        }
    } else {
        (None, None)
    };

    let stderr_layer = (verbose > 0).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("installing log subscriber")?;

    Ok(guard)
}
