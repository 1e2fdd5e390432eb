//! Domain layer - Calendar logic and curated data

pub mod calendar;
pub mod data;
pub mod date_ref;
pub mod fasting;
pub mod feast;
pub mod recommend;

pub use date_ref::DateRef;
pub use fasting::{FastingPeriod, Strictness};
pub use feast::{Feast, FeastKind};
