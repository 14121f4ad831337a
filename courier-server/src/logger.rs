//! Process-wide logging setup on fern.
//!
//! One sink per process: a log file when configured, otherwise stdout with
//! optional colors. `tracing` events from dependencies are bridged into
//! `log` so everything lands in the same sink.

use crate::error::{Result, ServerError};

use courier_config::LogLevel;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

pub fn initialize(level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> Result<()> {
    let sink = match &log_file {
        Some(path) => file_sink(path)?,
        None => console_sink(colored),
    };

    Dispatch::new()
        .level(level.filter())
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("logger already installed: {e}"),
        })?;

    tracing_log::LogTracer::init().ok();

    match &log_file {
        Some(path) => info!("Logging at '{}' to {}", level, path.display()),
        None => info!("Logging at '{}' to stdout", level),
    }

    Ok(())
}

fn file_sink(path: &Path) -> Result<Dispatch> {
    let file = fern::log_file(path).map_err(|e| ServerError::Logger {
        message: format!("cannot open log file {}: {}", path.display(), e),
    })?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(file))
}

fn console_sink(colored: bool) -> Dispatch {
    if !colored {
        // Plain text for non-TTY sinks (systemd, container logs)
        return Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{}] {}: {}",
                    humantime::format_rfc3339_seconds(SystemTime::now()),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(std::io::stdout());
    }

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::Cyan)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stdout())
}
