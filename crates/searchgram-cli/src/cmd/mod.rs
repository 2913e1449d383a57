pub mod audit;
pub mod explore;
pub mod export;

use searchgram_core::schema::RecordSet;

/// A loaded report, parsed once and shared by every n-gram pass.
pub struct Dataset {
    pub records: RecordSet,
    pub fingerprint: String,
}
