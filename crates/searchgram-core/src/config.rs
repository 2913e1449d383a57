use crate::consts::{DEFAULT_HEADER_SKIP, DEFAULT_MIN_CLICKS, DEFAULT_TOP_WASTE};
use crate::error::{SearchgramError, SgResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub loader: LoaderConfig,
    #[command(flatten)]
    pub report: ReportConfig,
}

/// How the loader treats a numeric cell that is still unparseable after
/// currency and separator stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Bad cells become 0. Never blocks a report on one cell.
    #[default]
    Coerce,
    /// Bad cells fail the load with a validation error.
    Strict,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Physical lines to discard before the header row.
    #[arg(long, default_value_t = DEFAULT_HEADER_SKIP)]
    pub header_skip: usize,
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
    /// Reject unparseable numeric cells instead of zeroing them.
    #[arg(long, default_value_t = false)]
    pub strict_numbers: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            header_skip: DEFAULT_HEADER_SKIP,
            delimiter: ',',
            strict_numbers: false,
        }
    }
}

impl LoaderConfig {
    pub fn numeric_policy(&self) -> NumericPolicy {
        if self.strict_numbers {
            NumericPolicy::Strict
        } else {
            NumericPolicy::Coerce
        }
    }

    pub fn delimiter_byte(&self) -> SgResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(SearchgramError::Config(format!(
                "Delimiter '{}' must be a single ASCII character",
                self.delimiter
            )))
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Comma separated n-gram lengths, e.g. "1,2,3".
    #[arg(long, default_value = "1,2,3")]
    pub ngram_sizes: String,
    #[arg(long, default_value_t = DEFAULT_MIN_CLICKS)]
    pub min_clicks: f64,
    #[arg(long, default_value_t = DEFAULT_TOP_WASTE)]
    pub top_waste: usize,
    #[arg(long, default_value_t = 50)]
    pub max_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ngram_sizes: "1,2,3".to_string(),
            min_clicks: DEFAULT_MIN_CLICKS,
            top_waste: DEFAULT_TOP_WASTE,
            max_rows: 50,
        }
    }
}

impl ReportConfig {
    pub fn get_ngram_sizes(&self) -> SgResult<Vec<usize>> {
        let mut sizes = Vec::new();
        for part in self.ngram_sizes.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let n: usize = part.parse().map_err(|_| {
                SearchgramError::Config(format!("Invalid n-gram size '{}' in --ngram-sizes", part))
            })?;
            if n == 0 {
                return Err(SearchgramError::Config(
                    "N-gram sizes must be positive".to_string(),
                ));
            }
            if !sizes.contains(&n) {
                sizes.push(n);
            }
        }
        if sizes.is_empty() {
            return Err(SearchgramError::Config(
                "--ngram-sizes requires at least one value".to_string(),
            ));
        }
        Ok(sizes)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SgResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies onto `self` only the options the user typed on the command line,
    /// so a JSON config keeps every value the CLI left at its default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(loader.header_skip);
        update_if_present!(loader.delimiter);
        update_if_present!(loader.strict_numbers);

        update_if_present!(report.ngram_sizes);
        update_if_present!(report.min_clicks);
        update_if_present!(report.top_waste);
        update_if_present!(report.max_rows);
    }
}
