use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Single line for the log panel, e.g. "14:02:11 INFO  Loaded cat.png (800x600)"
    pub fn display_line(&self) -> String {
        format!(
            "{} {:<5} {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.message
        )
    }
}

/// In-process logger shared between the `log` facade and the log panel
#[derive(Clone)]
pub struct AppLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
    max_entries: usize,
}

impl AppLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            max_entries,
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Info);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        // A panic while logging leaves the entries usable
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Most recent entry, shown in the status bar
    pub fn latest_entry(&self) -> Option<LogEntry> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, entry: LogEntry) {
        let mut entries = self.lock();
        entries.push(entry);

        // Keep only the most recent entries
        if entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            entries.drain(0..excess);
        }
    }
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.push(LogEntry {
                timestamp: Local::now(),
                level: record.level(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn record(logger: &AppLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("pdf_grid")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_keeps_most_recent_entries() {
        let logger = AppLogger::new(2);
        record(&logger, Level::Info, "one");
        record(&logger, Level::Warn, "two");
        record(&logger, Level::Error, "three");

        let messages: Vec<String> = logger
            .get_entries()
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_debug_is_filtered() {
        let logger = AppLogger::new(10);
        record(&logger, Level::Debug, "noise");
        assert_eq!(logger.len(), 0);

        record(&logger, Level::Info, "Saved grid_4x5_20pcs.pdf");
        let line = logger.get_entries()[0].display_line();
        assert!(line.contains("INFO"));
        assert!(line.ends_with("Saved grid_4x5_20pcs.pdf"));

        logger.clear();
        assert_eq!(logger.len(), 0);
    }

    #[test]
    fn test_latest_entry_tracks_last_message() {
        let logger = AppLogger::new(10);
        assert!(logger.latest_entry().is_none());

        record(&logger, Level::Info, "Loading cat.png...");
        record(&logger, Level::Error, "Failed to decode cat.png");
        let latest = logger.latest_entry().unwrap();
        assert_eq!(latest.level, Level::Error);
        assert_eq!(latest.message, "Failed to decode cat.png");

        record(&logger, Level::Debug, "Worker stopped");
        assert_eq!(logger.latest_entry().unwrap().message, "Failed to decode cat.png");

        logger.clear();
        assert!(logger.latest_entry().is_none());
    }
}
