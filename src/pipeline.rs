// src/pipeline.rs

use reqwest::blocking::Client;
use std::{io::BufRead, path::Path};
use tracing::{info, instrument};

use crate::{
    config::Config,
    document::{write_document, Template},
    error::Result,
    fetch::fetch_sheet,
    settlement::{ParseStats, SettlementReader},
};

/// Parse `input`, graft the settlements onto `template` and write the result
/// to `output_path`. Records are streamed straight into the output file.
#[instrument(level = "info", skip(input, template, output_path), fields(output = %output_path.as_ref().display()))]
pub fn generate<R: BufRead>(
    input: R,
    template: &Template,
    output_path: impl AsRef<Path>,
) -> Result<ParseStats> {
    let mut reader = SettlementReader::new(input)?;
    {
        let document = template.assemble(reader.by_ref());
        let written = write_document(output_path, &document);
        // a broken input stream surfaces as a serialization failure
        if let Some(e) = document.take_stream_error() {
            return Err(e);
        }
        written?;
    }
    Ok(reader.stats())
}

/// One full run: fetch the sheet, load the template, write the document.
#[instrument(level = "info", skip(config))]
pub fn run(config: &Config) -> Result<ParseStats> {
    let url = config.export_url()?;
    let client = Client::new();
    let body = fetch_sheet(&client, &url)?;
    run_with(body, config)
}

/// Load the template and write the document for an already fetched `body`.
/// The output file is only touched once the template has loaded.
pub fn run_with<R: BufRead>(body: R, config: &Config) -> Result<ParseStats> {
    let template = Template::load(&config.template_path)?;
    let stats = generate(body, &template, &config.output_path)?;
    info!(output = %config.output_path.display(), "done");
    Ok(stats)
}
