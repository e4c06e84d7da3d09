use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
///
/// Every entry is kept in memory for the logs dialog. When file logging is
/// enabled, entries are also forwarded to the `log` facade, which a `fern`
/// dispatch writes to the application log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: None,
        }
    }

    /// Build a logger according to the `[logging]` config section
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            let path = Self::get_log_file_path()?;
            Self::install_file_dispatch(&path)?;
            logger.log_file = Some(path);
        }
        Ok(logger)
    }

    fn install_file_dispatch(path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Debug)
            .chain(file);

        // A global logger can only be installed once per process
        if dispatch.apply().is_err() {
            log::debug!("File logger already installed, reusing it");
        }
        Ok(())
    }

    /// Path of the log file written when logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("chatolution").join("chatolution.log"))
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if self.is_enabled() {
            log::info!("{}", message);
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Flush the file sink, if any
    pub fn flush(&self) {
        log::logger().flush();
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
