// src/fetch.rs

use reqwest::blocking::{Client, Response};
use std::io::{BufRead, BufReader};
use tracing::{debug, info};
use url::Url;

use crate::error::Result;

/// GET the sheet export at `url` and hand back its body as a line reader.
///
/// Any network failure or non-success status is returned as is; there
/// are no retries.
pub fn fetch_sheet(client: &Client, url: &Url) -> Result<impl BufRead> {
    debug!(%url, "fetching sheet");
    let resp: Response = client.get(url.clone()).send()?.error_for_status()?;
    info!(%url, status = %resp.status(), "sheet response");
    Ok(BufReader::new(resp))
}
