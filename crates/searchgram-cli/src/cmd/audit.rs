use super::Dataset;
use crate::reports;
use clap::Args;
use searchgram_core::analysis::waste_candidates;
use searchgram_core::config::Config;
use searchgram_core::error::SgResult;
use searchgram_core::ngram::aggregate;
use searchgram_core::summary::AccountSummary;

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[command(flatten)]
    pub config: Config,

    /// List every negative keyword candidate, not just the top ones
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

pub fn run(args: &AuditArgs, config: &Config, data: &Dataset) -> SgResult<()> {
    let summary = AccountSummary::from_records(&data.records);
    reports::print_summary(&summary);

    let unigrams = aggregate(&data.records.records, 1)?;
    let waste = waste_candidates(&unigrams);

    println!("\n💸 === WHERE ARE YOU BURNING MONEY? === 💸");
    if waste.is_empty() {
        println!("✅ Incredible! No single word has 0 conversions. Your targeting is very tight.");
        return Ok(());
    }

    println!(
        "🚨 Potential Savings: you spent {} on words with 0 conversions.",
        reports::euros(waste.potential_savings, 0)
    );

    let limit = if args.all {
        waste.candidates.len()
    } else {
        config.report.top_waste
    };
    reports::print_waste_table(waste.top(limit), waste.candidates.len());
    Ok(())
}
