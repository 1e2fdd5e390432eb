//! sinaxar - Romanian Orthodox calendar companion
//!
//! A command-line tool that answers questions about the liturgical year:
//! feasts on a date, fasting status, upcoming observances, and pilgrimage
//! destinations suggested by feasts falling within a forward window.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SinaxarError;
