// src/config.rs

use std::path::PathBuf;
use url::Url;

/// Spreadsheet holding the settlement list.
pub const SHEET_ID: &str = "1myQi-Y6-asM3UkoqUpDEAJSPvYiaOhx-oy7UthgweUk";
pub const SHEET_NAME: &str = "Settlements";

pub const TEMPLATE_PATH: &str = "settlements_config.json";
pub const OUTPUT_PATH: &str = "CivMCSettlements.json";

/// Where to read from and write to for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sheet_id: String,
    pub sheet_name: String,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: SHEET_ID.to_string(),
            sheet_name: SHEET_NAME.to_string(),
            template_path: PathBuf::from(TEMPLATE_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl Config {
    /// CSV export link for the configured sheet.
    pub fn export_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse("https://docs.google.com/spreadsheets/d/")?
            .join(&format!("{}/gviz/tq", self.sheet_id))?;
        url.query_pairs_mut()
            .append_pair("tqx", "out:csv")
            .append_pair("sheet", &self.sheet_name);
        Ok(url)
    }
}
