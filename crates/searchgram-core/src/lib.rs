pub mod analysis;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod loader;
pub mod ngram;
pub mod schema;
pub mod summary;
pub mod util;

// Re-export the engine entry points so callers can use searchgram_core::*
pub use self::loader::{normalize, ReportLoader};
pub use self::ngram::{aggregate, aggregate_sizes, NGramEntry, NGramTable};
pub use self::schema::{Column, Record, RecordSet};
pub use self::summary::AccountSummary;
