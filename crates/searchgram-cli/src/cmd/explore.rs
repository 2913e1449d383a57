use super::Dataset;
use crate::reports;
use clap::Args;
use searchgram_core::analysis::{explore, filter_min_clicks};
use searchgram_core::config::Config;
use searchgram_core::error::SgResult;
use searchgram_core::ngram::aggregate_sizes;

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(config: &Config, data: &Dataset) -> SgResult<()> {
    let sizes = config.report.get_ngram_sizes()?;
    let tables = aggregate_sizes(&data.records.records, &sizes)?;
    let min_clicks = config.report.min_clicks;

    println!("\n🏆 === PERFORMANCE BY PHRASE === 🏆");
    for table in &tables {
        let matching = filter_min_clicks(&table.entries, min_clicks).len();
        let rows = explore(&table.entries, min_clicks, config.report.max_rows);
        reports::print_ngram_table(table.n, &rows, matching, min_clicks);
    }
    Ok(())
}
