use super::Dataset;
use clap::Args;
use searchgram_core::analysis::sort_by_cost_desc;
use searchgram_core::config::Config;
use searchgram_core::error::SgResult;
use searchgram_core::export::{write_csv, write_json, ExportBundle, ExportFormat};
use searchgram_core::ngram::aggregate_sizes;
use searchgram_core::summary::AccountSummary;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: Config,

    /// Output directory
    #[arg(short, long, default_value = "out")]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

pub fn run(args: &ExportArgs, config: &Config, data: &Dataset) -> SgResult<()> {
    let sizes = config.report.get_ngram_sizes()?;
    let mut tables = aggregate_sizes(&data.records.records, &sizes)?;
    for table in &mut tables {
        sort_by_cost_desc(&mut table.entries);
    }

    fs::create_dir_all(&args.out)?;

    match args.format {
        ExportFormat::Csv => {
            for table in &tables {
                let path = args.out.join(format!("ngrams_{}.csv", table.n));
                write_csv(BufWriter::new(File::create(&path)?), &table.entries)?;
                info!("💾 Wrote {} {}-grams to {}", table.entries.len(), table.n, path.display());
            }
        }
        ExportFormat::Json => {
            let path = args.out.join("searchgram.json");
            let bundle = ExportBundle {
                source_fingerprint: data.fingerprint.clone(),
                summary: AccountSummary::from_records(&data.records),
                tables,
            };
            write_json(BufWriter::new(File::create(&path)?), &bundle)?;
            info!("💾 Wrote analysis bundle to {}", path.display());
        }
    }
    Ok(())
}
