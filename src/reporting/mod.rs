pub mod log;
pub mod logger;
