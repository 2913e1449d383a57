/// Number of physical preamble lines Google Ads prepends before the header row
/// (report title and date range).
pub const DEFAULT_HEADER_SKIP: usize = 2;

/// Grand-total row emitted by the export. Matched exactly, before lowercasing.
pub const TOTAL_ROW_SENTINEL: &str = "Total";

/// Default click threshold for the explorer tables.
pub const DEFAULT_MIN_CLICKS: f64 = 5.0;

/// Default length of the wasted-spend leaderboard.
pub const DEFAULT_TOP_WASTE: usize = 10;

/// Column order of every exported n-gram table.
pub const EXPORT_HEADERS: [&str; 11] = [
    "ngram",
    "cost",
    "conversions",
    "value",
    "clicks",
    "imps",
    "count",
    "cpa",
    "roas",
    "cpc",
    "ctr",
];
