use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::CONFIG;

/// Keeps the non-blocking log writers alive for the process lifetime.
pub struct LoggingGuards {
    _guards: Vec<WorkerGuard>,
}

fn parse_log_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

fn daily_writer(logs_dir: &Path, file_name: &str, guards: &mut Vec<WorkerGuard>) -> NonBlocking {
    let appender = tracing_appender::rolling::daily(logs_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    guards.push(guard);
    writer
}

/// Installs stdout plus daily-rolling text and JSON sinks: a general log
/// and a `studio.timing` log kept out of the general stream.
pub fn init_logging() -> LoggingGuards {
    let logs_dir = Path::new("logs");
    if let Err(err) = fs::create_dir_all(logs_dir) {
        eprintln!("Failed to create logs directory: {err}");
    }

    let general_filter = Targets::new()
        .with_default(parse_log_level(&CONFIG.log_level))
        .with_target("studio.timing", LevelFilter::OFF)
        .with_target("hyper", LevelFilter::WARN)
        .with_target("hyper_util", LevelFilter::WARN)
        .with_target("tower_http", LevelFilter::WARN)
        .with_target("reqwest", LevelFilter::WARN);
    let timing_filter = Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("studio.timing", LevelFilter::INFO);

    let mut guards = Vec::new();
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_filter(general_filter.clone()),
        )
        .with(
            fmt::layer()
                .with_writer(daily_writer(logs_dir, "studio.log", &mut guards))
                .with_ansi(false)
                .with_filter(general_filter.clone()),
        )
        .with(
            fmt::layer()
                .json()
                .with_writer(daily_writer(logs_dir, "studio.jsonl", &mut guards))
                .with_filter(general_filter),
        )
        .with(
            fmt::layer()
                .with_writer(daily_writer(logs_dir, "timing.log", &mut guards))
                .with_ansi(false)
                .with_filter(timing_filter.clone()),
        )
        .with(
            fmt::layer()
                .json()
                .with_writer(daily_writer(logs_dir, "timing.jsonl", &mut guards))
                .with_filter(timing_filter),
        )
        .init();

    LoggingGuards { _guards: guards }
}
