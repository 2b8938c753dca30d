use mdgarden_core::config::{LoggingConfig, ResolvedConfig};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Flushes the log file writer when the process exits.
static FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Installs the global subscriber: a human readable stderr layer plus an
/// optional plain text file layer when `[logging] file` is configured.
///
/// `RUST_LOG` directives are layered on top of the configured levels.
pub fn init(cfg: &ResolvedConfig) {
    let logging = &cfg.logging;
    let console_level = parse_level(&logging.level).unwrap_or(LevelFilter::INFO);

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter_for(console_level));

    let file = logging.file.as_deref().map(|path| file_layer(path, logging));

    tracing_subscriber::registry().with(console).with(file).init();
}

fn file_layer<S>(path: &Path, logging: &LoggingConfig) -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let level = logging
        .file_level
        .as_deref()
        .and_then(parse_level)
        .or_else(|| parse_level(&logging.level))
        .unwrap_or(LevelFilter::DEBUG);

    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("cannot open log file {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut slot) = FILE_GUARD.lock() {
        slot.replace(guard);
    }

    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter_for(level))
}

fn filter_for(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

/// Accepts the five tracing level names, case-insensitively.
fn parse_level(s: &str) -> Option<LevelFilter> {
    let level = match s.trim().to_ascii_lowercase().as_str() {
        "error" => LevelFilter::ERROR,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "debug" => LevelFilter::DEBUG,
        "trace" => LevelFilter::TRACE,
        _ => return None,
    };
    Some(level)
}
