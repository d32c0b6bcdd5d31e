//! Core plumbing shared by every command
//!
//! - `config`: environment-sourced settings
//! - `clock`: injectable source of today's date
//! - `store`: dated raw JSON files on disk

pub mod clock;
pub mod config;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use store::RawStore;
