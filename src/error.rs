// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

use crate::settlement::Column;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal failures. Any of these ends the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fetching sheet failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid sheet URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("reading sheet body failed: {0}")]
    Stream(#[source] csv::Error),

    #[error("loading template {path:?}: {source}")]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("writing {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serializing document: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("top level is not a JSON object")]
    NotAnObject,
}

/// Why a single row was rejected. Recovered locally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("required column {:?} is empty", .0.alias())]
    MissingField(Column),

    #[error("column {:?} is not an integer: {value:?}", .column.alias())]
    InvalidInteger { column: Column, value: String },

    #[error("row is not valid UTF-8")]
    InvalidUtf8,
}
