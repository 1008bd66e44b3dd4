// src/settlement/parse.rs

use csv::{ByteRecord, ByteRecordsIntoIter, ReaderBuilder, StringRecord};
use std::{fmt, io::BufRead};
use tracing::{debug, info, warn};

use super::columns::{Column, Kind, COLUMNS};
use super::record::Settlement;
use crate::error::{Error, Result, RowError};

/// Decoration lines at the top of the sheet export. Never treated as data.
pub const HEADER_LINES: usize = 5;

/// Outcome counters for one pass over the sheet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Rows turned into a `Settlement`.
    pub parsed: usize,
    /// Rows rejected with a `RowError`.
    pub failed: usize,
    /// Fully empty rows, skipped silently.
    pub blank: usize,
}

impl fmt::Display for ParseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parsed {} entries correctly and {} incorrectly",
            self.parsed, self.failed
        )
    }
}

/// Lazily turns sheet rows into settlements.
///
/// Bad rows are logged and counted, never returned. The only `Err` the
/// iterator yields is a failure of the underlying stream, after which it
/// is exhausted. Once the input runs out the summary is logged and
/// `stats()` holds the final counts.
pub struct SettlementReader<R> {
    records: ByteRecordsIntoIter<R>,
    stats: ParseStats,
    finished: bool,
}

impl<R: BufRead> SettlementReader<R> {
    /// Skip the header decoration of `input` and prepare to read rows.
    /// Input shorter than the header simply yields no rows.
    ///
    /// The last skipped line is compared against the known column names and
    /// any name found at the wrong position is logged. Rows are still read
    /// by position.
    pub fn new(mut input: R) -> Result<Self> {
        let mut line = Vec::new();
        let mut last = Vec::new();
        for _ in 0..HEADER_LINES {
            line.clear();
            let n = input
                .read_until(b'\n', &mut line)
                .map_err(|e| Error::Stream(e.into()))?;
            if n == 0 {
                break;
            }
            std::mem::swap(&mut last, &mut line);
        }
        for (position, column) in header_mismatches(&last) {
            warn!(
                position,
                expected = column.index(),
                column = column.alias(),
                "sheet column out of place"
            );
        }

        let records = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input)
            .into_byte_records();

        Ok(Self {
            records,
            stats: ParseStats::default(),
            finished: false,
        })
    }
}

impl<R> SettlementReader<R> {
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            info!(
                parsed = self.stats.parsed,
                failed = self.stats.failed,
                blank = self.stats.blank,
                "{}",
                self.stats
            );
        }
    }
}

impl<R: BufRead> Iterator for SettlementReader<R> {
    type Item = Result<Settlement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for next in self.records.by_ref() {
            let record = match next {
                Ok(r) => r,
                Err(e) => {
                    self.finish();
                    return Some(Err(Error::Stream(e)));
                }
            };
            // position is relative to the first line after the header
            let line = record
                .position()
                .map(|p| p.line() as usize + HEADER_LINES)
                .unwrap_or_default();

            // padding rows span the whole sheet; short empty rows are errors
            if record.len() >= COLUMNS.len() && record.iter().all(|field| field.is_empty()) {
                debug!(line, "skipping empty row");
                self.stats.blank += 1;
                continue;
            }

            match decode(&record).and_then(|fields| parse_row(&fields)) {
                Ok(settlement) => {
                    self.stats.parsed += 1;
                    return Some(Ok(settlement));
                }
                Err(e) => {
                    warn!(line, error = %e, row = ?record, "failed to parse row");
                    self.stats.failed += 1;
                }
            }
        }

        self.finish();
        None
    }
}

/// Known column names in `line` that sit at a position other than their
/// own, as `(position, column)`.
pub fn header_mismatches(line: &[u8]) -> Vec<(usize, Column)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line);
    let mut record = StringRecord::new();
    if !matches!(reader.read_record(&mut record), Ok(true)) {
        return Vec::new();
    }
    record
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| {
            Column::from_alias(cell.trim())
                .filter(|c| c.index() != i)
                .map(|c| (i, c))
        })
        .collect()
}

fn decode(record: &ByteRecord) -> Result<Vec<&str>, RowError> {
    record
        .iter()
        .map(|field| std::str::from_utf8(field).map_err(|_| RowError::InvalidUtf8))
        .collect()
}

/// Build a settlement from one row of raw values in sheet order.
///
/// Missing trailing cells count as empty and cells past the last known
/// column are ignored. Empty values become `None`; a required column that
/// is empty, or an integer column that does not parse, rejects the row.
pub fn parse_row(raw: &[&str]) -> Result<Settlement, RowError> {
    let value = |column: Column| raw.get(column.index()).copied().filter(|v| !v.is_empty());
    let text = |column: Column| value(column).map(str::to_string);
    let integer = |column: Column| -> Result<Option<i64>, RowError> {
        debug_assert_eq!(column.kind(), Kind::Integer);
        value(column)
            .map(|v| {
                v.trim().parse::<i64>().map_err(|_| RowError::InvalidInteger {
                    column,
                    value: v.to_string(),
                })
            })
            .transpose()
    };
    Ok(Settlement {
        name: required(Column::Name, text(Column::Name))?,
        x: required(Column::X, integer(Column::X)?)?,
        z: required(Column::Z, integer(Column::Z)?)?,
        nation: required(Column::Nation, text(Column::Nation))?,
        contact: text(Column::Contact),
        image: text(Column::Image),
        image_album: text(Column::ImageAlbum),
        discord: text(Column::Discord),
        web: text(Column::Web),
        wiki: text(Column::Wiki),
        symbol: text(Column::Symbol),
        visitors: text(Column::Visitors),
        zoom_visibility: integer(Column::ZoomVisibility)?,
        id: integer(Column::Id)?,
        notes: text(Column::Notes),
        nickname: text(Column::Nickname),
    })
}

fn required<T>(column: Column, value: Option<T>) -> Result<T, RowError> {
    value.ok_or(RowError::MissingField(column))
}
