pub mod redact;
pub mod runner;
