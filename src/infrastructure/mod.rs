//! Infrastructure layer - Configuration I/O

pub mod config;

pub use config::{Config, NameStyle};
