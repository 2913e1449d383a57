#![allow(dead_code)]

use searchgram_core::schema::Record;
use std::io::Write;
use tempfile::NamedTempFile;

/// Builder for Record to keep test fixtures readable
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(term: &str) -> Self {
        Self {
            record: Record::new(term),
        }
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.record.cost = cost;
        self
    }

    pub fn conversions(mut self, conversions: f64) -> Self {
        self.record.conversions = conversions;
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.record.value = value;
        self
    }

    pub fn clicks(mut self, clicks: f64) -> Self {
        self.record.clicks = clicks;
        self
    }

    pub fn imps(mut self, imps: f64) -> Self {
        self.record.imps = imps;
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

/// The two-row sample used across the aggregation tests.
pub fn shoe_records() -> Vec<Record> {
    vec![
        RecordBuilder::new("buy red shoes")
            .cost(10.0)
            .conversions(1.0)
            .value(20.0)
            .clicks(5.0)
            .imps(100.0)
            .build(),
        RecordBuilder::new("red shoes sale")
            .cost(5.0)
            .clicks(2.0)
            .imps(50.0)
            .build(),
    ]
}

/// Writes a Google Ads style export: two preamble lines, then `body`.
pub fn write_report(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Search terms report").unwrap();
    writeln!(file, "\"January 1, 2024 - March 31, 2024\"").unwrap();
    write!(file, "{}", body).unwrap();
    file
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
