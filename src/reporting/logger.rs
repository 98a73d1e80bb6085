use crate::reporting::log::{self, Level, Log};

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Writes log entries at or above the configured level to the log file.
/// Stdout belongs to the console session, so without a file nothing is kept.
pub struct Logger {
    log_file: Option<File>,
    log_level: Level
}

impl Logger {
    pub fn create(log_file_path: Option<PathBuf>, log_level: &str) -> Result<Self, std::io::Error> {
        let log_lvl = Level::parse(log_level).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let mut log_file = None;
        if let Some(path) = log_file_path {
            log_file = Some(File::create(path)?);
        }

        Ok(Logger { log_file: log_file, log_level: log_lvl })
    }

    pub fn disabled() -> Self {
        Logger { log_file: None, log_level: Level::Error }
    }

    pub fn log(&mut self, module: &str, level: Level, content: String) {
        let entry = log::create(module, level, content);
        if entry.get_level() < self.log_level {
            return;
        }

        if let Some(file) = self.log_file.as_mut() {
            if let Err(e) = write_entry(file, &entry) {
                eprintln!("Could not save log to file: {}", e);
            }
        }
    }

    pub fn debug(&mut self, module: &str, content: String) {
        self.log(module, Level::Debug, content);
    }

    pub fn info(&mut self, module: &str, content: String) {
        self.log(module, Level::Info, content);
    }

    pub fn error(&mut self, module: &str, content: String) {
        self.log(module, Level::Error, content);
    }
}

fn write_entry<W: Write>(sink: &mut W, entry: &Log) -> std::io::Result<()> {
    sink.write_all(format!("{}\n", entry).as_bytes())?;
    sink.flush()
}

#[cfg(test)]
struct BrokenSink;

#[cfg(test)]
impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_entry_reports_failures() {
    let entry = log::create("cli", Level::Info, "session started".to_string());

    let mut buffer = Vec::<u8>::new();
    assert!(write_entry(&mut buffer, &entry).is_ok());
    assert!(String::from_utf8(buffer).unwrap().ends_with("[cli][Info] session started\n"));

    let result = write_entry(&mut BrokenSink, &entry);
    assert!(result.is_err());
    assert_eq!(result.err().unwrap().to_string(), "disk full");
}

#[test]
fn logger_filters_by_level() {
    let path = std::env::temp_dir().join(format!("assistant_bot_logger_{}.log", std::process::id()));
    {
        let mut logger = Logger::create(Some(path.clone()), "info").unwrap();
        logger.debug("cli", "dispatching add".to_string());
        logger.info("cli", "session started".to_string());
        logger.error("handlers", "Phone number must be 10 digits.".to_string());
    }

    let content = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[cli][Info] session started"));
    assert!(lines[1].ends_with("[handlers][Error] Phone number must be 10 digits."));
}

#[test]
fn logger_rejects_unknown_level() {
    let result = Logger::create(None, "verbose");
    assert!(result.is_err());
    assert_eq!(result.err().unwrap().to_string(), "Invalid logging level: verbose. Available: debug, info, error");
}
