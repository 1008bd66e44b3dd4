// src/document/write.rs

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{info, instrument};

use crate::error::{Error, Result};

const INDENT: &[u8] = b"    ";

/// Pretty-print `value` into `writer`: four-space indent, keys in the order
/// the value emits them, non-ASCII left as-is.
pub fn to_writer<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> serde_json::Result<()> {
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)
}

/// Truncate or create `path` and write `value` to it.
///
/// The file is written in place; a failure part way leaves it truncated.
#[instrument(level = "info", skip(path, value), fields(path = %path.as_ref().display()))]
pub fn write_document<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    to_writer(&mut writer, value).map_err(|e| {
        if e.is_io() {
            io_err(e.into())
        } else {
            Error::Serialize(e)
        }
    })?;
    writer.flush().map_err(io_err)?;

    info!("wrote document");
    Ok(())
}
