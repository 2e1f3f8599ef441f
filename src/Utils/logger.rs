use crate::numerical::errors::SolverError;
use chrono::Local;
use simplelog::*;
use log::debug;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Maps a log level name to a filter. `None` means "info"; "off" and "none" switch logging off.
pub fn parse_log_level(level: Option<&str>) -> Result<LevelFilter, SolverError> {
    match level {
        None => Ok(LevelFilter::Info),
        Some(level) => match level.trim().to_lowercase().as_str() {
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            "off" | "none" => Ok(LevelFilter::Off),
            other => Err(SolverError::InvalidConfig(format!(
                "loglevel must be debug, info, warn, error, off or none, got '{}'",
                other
            ))),
        },
    }
}

/// Creates `dir/log_<date>_<time>.txt` for the file logger.
fn create_log_file(dir: &Path) -> Result<(File, PathBuf), SolverError> {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = dir.join(format!("log_{}.txt", date_and_time));
    let file = File::create(&path)
        .map_err(|e| SolverError::Logger(format!("{}: {}", path.display(), e)))?;
    Ok((file, path))
}

/// Installs a terminal logger and, when `log_dir` is given, a file logger writing to
/// `log_dir/log_<date>_<time>.txt`.
///
/// Returns the log file path if one was created. Only one global logger can exist per
/// process: once one is installed, later calls leave it in place, create no file and
/// return `None`.
pub fn init_logger(
    loglevel: Option<&str>,
    log_dir: Option<&Path>,
) -> Result<Option<PathBuf>, SolverError> {
    let level = parse_log_level(loglevel)?;
    if level == LevelFilter::Off {
        return Ok(None);
    }
    if log::max_level() != LevelFilter::Off {
        debug!("logger already installed, keeping it");
        return Ok(None);
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    let mut log_path = None;
    if let Some(dir) = log_dir {
        let (file, path) = create_log_file(dir)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
        log_path = Some(path);
    }

    if CombinedLogger::init(loggers).is_err() {
        // another thread installed its logger first
        if let Some(path) = log_path.take() {
            let _ = fs::remove_file(path);
        }
    }
    Ok(log_path)
}
