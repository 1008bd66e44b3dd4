pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod settlement;

pub use config::Config;
pub use error::{Error, Result, RowError};
pub use settlement::{ParseStats, Settlement, SettlementReader};
