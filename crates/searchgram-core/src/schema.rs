use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Canonical columns of a cleaned search-term report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Term,
    Cost,
    Conversions,
    Value,
    Clicks,
    Imps,
}

impl Column {
    /// The additive metric columns, in canonical order.
    pub const METRICS: [Column; 5] = [
        Column::Cost,
        Column::Conversions,
        Column::Value,
        Column::Clicks,
        Column::Imps,
    ];

    /// Maps a header from the Google Ads export to its canonical column.
    /// Anything not in the table is dropped by the loader.
    pub fn from_source_header(header: &str) -> Option<Column> {
        match header.trim().to_lowercase().as_str() {
            "search term" => Some(Column::Term),
            "cost" => Some(Column::Cost),
            "conversions" => Some(Column::Conversions),
            "conv. value" => Some(Column::Value),
            "clicks" => Some(Column::Clicks),
            "impressions" => Some(Column::Imps),
            _ => None,
        }
    }

    pub fn is_metric(self) -> bool {
        self != Column::Term
    }
}

/// One cleaned row of the report. Metrics missing from the source are 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub term: String,
    pub cost: f64,
    pub conversions: f64,
    pub value: f64,
    pub clicks: f64,
    pub imps: f64,
}

impl Record {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Default::default()
        }
    }

    pub fn set_metric(&mut self, column: Column, val: f64) {
        match column {
            Column::Term => {}
            Column::Cost => self.cost = val,
            Column::Conversions => self.conversions = val,
            Column::Value => self.value = val,
            Column::Clicks => self.clicks = val,
            Column::Imps => self.imps = val,
        }
    }
}

/// The normalized output of the loader. Immutable once built and safe to share
/// across any number of aggregation calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    pub records: Vec<Record>,
    /// Canonical columns that were present in the source, in source order.
    pub columns: Vec<Column>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>, columns: Vec<Column>) -> Self {
        Self { records, columns }
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self {
            records,
            columns: Column::iter().collect(),
        }
    }
}
