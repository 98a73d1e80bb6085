use chrono::{DateTime, Utc};

use std::fmt;

type Timestamp = i64;

#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub enum Level {
    Debug,
    Info,
    Error
}

impl Level {
    pub fn parse(level: &str) -> Result<Level, String> {
        match level {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "error" => Ok(Level::Error),
            invalid => Err(format!("Invalid logging level: {}. Available: debug, info, error", invalid))
        }
    }
}

pub struct Log {
    timestamp: Timestamp,
    module: String,
    level: Level,
    content: String
}

impl Log {
    pub(super) fn get_level(&self) -> Level {
        self.level
    }
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp_micros(self.timestamp) {
            Some(datetime) => {
                write!(f, "[{}][{}][{:?}] {}", datetime.to_rfc3339(), self.module, self.level, self.content)
            }
            None => Err(fmt::Error{})
        }
    }
}

pub fn create(module: &str, level: Level, content: String) -> Log {
    assert!(!module.is_empty());
    assert!(!content.is_empty());
    Log { timestamp: Utc::now().timestamp_micros(), module: module.to_string(), level: level, content: content }
}

#[test]
fn test_log() {
    {
        let first = create("cli", Level::Info, "session started".to_string());
        let second = create("handlers", Level::Error, "Phone number must be 10 digits.".to_string());
        assert!(first.timestamp <= second.timestamp);
        assert_eq!(first.get_level(), Level::Info);
        assert_eq!(second.get_level(), Level::Error);
    }
    {
        let mut log = format!("{}", create("cli", Level::Info, "Something normal".to_string()));
        let stamp_end = log.find(']').unwrap() + 1;
        assert_eq!(log.split_off(stamp_end), "[cli][Info] Something normal");
        let time_when_log_created = Utc::now();
        log = format!("{}", create("handlers", Level::Error, "Contact not found.".to_string()));
        let stamp_end = log.find(']').unwrap() + 1;
        assert_eq!(log.split_off(stamp_end), "[handlers][Error] Contact not found.");

        let _ = log.pop();
        let _ = log.remove(0);

        let parsed_datetime = DateTime::parse_from_rfc3339(log.as_str());
        assert!(parsed_datetime.is_ok());
        assert!((parsed_datetime.unwrap().timestamp() - time_when_log_created.timestamp()).abs() <= 1);
    }
}

#[test]
fn test_level() {
    assert_eq!(Level::parse("debug"), Ok(Level::Debug));
    assert_eq!(Level::parse("info"), Ok(Level::Info));
    assert_eq!(Level::parse("error"), Ok(Level::Error));
    assert_eq!(Level::parse("trace"), Err("Invalid logging level: trace. Available: debug, info, error".to_string()));
    assert!(Level::Debug < Level::Info && Level::Info < Level::Error);
}
