pub mod columns;
pub mod parse;
pub mod record;

pub use columns::{Column, Kind, COLUMNS};
pub use parse::{parse_row, ParseStats, SettlementReader, HEADER_LINES};
pub use record::{FieldValue, Settlement};
