use crate::consts::EXPORT_HEADERS;
use crate::error::SgResult;
use crate::ngram::{NGramEntry, NGramTable};
use crate::summary::AccountSummary;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Everything one analysis produced, tagged with the source file's fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    pub source_fingerprint: String,
    pub summary: AccountSummary,
    pub tables: Vec<NGramTable>,
}

pub fn write_csv<W: Write>(writer: W, entries: &[NGramEntry]) -> SgResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written by hand so an empty table still carries its header.
    wtr.write_record(EXPORT_HEADERS)?;
    for entry in entries {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, bundle: &ExportBundle) -> SgResult<()> {
    serde_json::to_writer_pretty(&mut writer, bundle)?;
    writer.flush()?;
    Ok(())
}
