use crate::config::{LoaderConfig, NumericPolicy};
use crate::consts::{DEFAULT_HEADER_SKIP, TOTAL_ROW_SENTINEL};
use crate::error::{SearchgramError, SgResult};
use crate::schema::{Column, Record, RecordSet};
use crate::util::fingerprint;
use csv::StringRecord;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;

/// How a metric column was stored in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEncoding {
    /// Every non-empty cell is already a plain number.
    Numeric,
    /// At least one cell carries formatting (currency, separators, "N/A"...).
    Text,
}

/// Parses a Google Ads search-terms export into a cleaned [`RecordSet`].
#[derive(TypedBuilder, Debug, Clone)]
pub struct ReportLoader {
    #[builder(default = DEFAULT_HEADER_SKIP)]
    pub header_skip: usize,
    #[builder(default = b',')]
    pub delimiter: u8,
    #[builder(default)]
    pub numeric_policy: NumericPolicy,
}

impl Default for ReportLoader {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Normalizes a raw export with the product defaults (comma separated,
/// bad numbers coerced to 0).
pub fn normalize(raw: &[u8], header_skip: usize) -> SgResult<RecordSet> {
    ReportLoader::builder()
        .header_skip(header_skip)
        .build()
        .load_from_bytes(raw)
}

impl ReportLoader {
    pub fn from_config(cfg: &LoaderConfig) -> SgResult<Self> {
        Ok(Self::builder()
            .header_skip(cfg.header_skip)
            .delimiter(cfg.delimiter_byte()?)
            .numeric_policy(cfg.numeric_policy())
            .build())
    }

    pub fn load_from_path<P: AsRef<Path>>(&self, path: P) -> SgResult<RecordSet> {
        let path = path.as_ref();
        info!("📂 Loading report: {}", path.display());
        let raw = fs::read(path)?;
        self.load_from_bytes(&raw)
    }

    pub fn load_from_reader<R: Read>(&self, mut reader: R) -> SgResult<RecordSet> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        self.load_from_bytes(&raw)
    }

    pub fn load_from_bytes(&self, raw: &[u8]) -> SgResult<RecordSet> {
        debug!("Report fingerprint: {}", fingerprint(raw));

        let body = skip_lines(raw, self.header_skip).ok_or_else(|| {
            SearchgramError::Unreadable(format!(
                "report ends before its header row (expected {} preamble lines)",
                self.header_skip
            ))
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(body);

        let headers = rdr.headers().map_err(unreadable)?.clone();
        let mapping = map_headers(&headers);
        let term_idx = mapping
            .iter()
            .find(|(_, col)| *col == Column::Term)
            .map(|(idx, _)| *idx)
            .ok_or_else(|| {
                SearchgramError::Unreadable("no 'Search term' column in header row".to_string())
            })?;

        let mut rows: Vec<StringRecord> = Vec::new();
        for result in rdr.records() {
            let rec = result.map_err(unreadable)?;
            if rec.len() > headers.len() {
                return Err(SearchgramError::Unreadable(format!(
                    "line {} has {} fields but the header has {}",
                    self.physical_line(&rec),
                    rec.len(),
                    headers.len()
                )));
            }
            rows.push(rec);
        }

        let mut records: Vec<Record> = rows
            .iter()
            .map(|rec| Record::new(rec.get(term_idx).unwrap_or_default()))
            .collect();

        for &(idx, column) in mapping.iter().filter(|(_, c)| c.is_metric()) {
            let encoding = detect_encoding(&rows, idx);
            debug!("Column '{}' <- field {} ({:?})", column, idx, encoding);

            for (rec, record) in rows.iter().zip(records.iter_mut()) {
                let cell = rec.get(idx).unwrap_or_default();
                let val = match encoding {
                    CellEncoding::Numeric => parse_plain(cell).unwrap_or(0.0),
                    CellEncoding::Text => match parse_formatted(cell) {
                        Some(v) => v,
                        None => self.reject_or_zero(rec, column, cell)?,
                    },
                };
                record.set_metric(column, val);
            }
        }

        let before = records.len();
        records.retain(|r| r.term != TOTAL_ROW_SENTINEL);
        let removed = before - records.len();

        info!(
            "Loaded {} search terms ({} total rows removed, {} columns mapped)",
            records.len(),
            removed,
            mapping.len()
        );

        let columns = mapping.into_iter().map(|(_, c)| c).collect();
        Ok(RecordSet::new(records, columns))
    }

    fn reject_or_zero(&self, rec: &StringRecord, column: Column, cell: &str) -> SgResult<f64> {
        // Blank cells carry no data and are 0 under either policy.
        if cell.trim().is_empty() {
            return Ok(0.0);
        }
        match self.numeric_policy {
            NumericPolicy::Coerce => Ok(0.0),
            NumericPolicy::Strict => Err(SearchgramError::Validation(format!(
                "line {}: {} value '{}' is not a number",
                self.physical_line(rec),
                column,
                cell
            ))),
        }
    }

    fn physical_line(&self, rec: &StringRecord) -> u64 {
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        line + self.header_skip as u64
    }
}

fn unreadable(e: csv::Error) -> SearchgramError {
    SearchgramError::Unreadable(e.to_string())
}

/// Returns the input after its first `n` physical lines, or `None` if it has
/// no content left for a header row.
fn skip_lines(raw: &[u8], n: usize) -> Option<&[u8]> {
    let mut rest = raw;
    for _ in 0..n {
        let pos = rest.iter().position(|&b| b == b'\n')?;
        rest = &rest[pos + 1..];
    }
    if rest.iter().all(|b| b.is_ascii_whitespace()) {
        None
    } else {
        Some(rest)
    }
}

/// Header index -> canonical column. Unknown headers are dropped, and a
/// repeated canonical column keeps its first occurrence.
fn map_headers(headers: &StringRecord) -> Vec<(usize, Column)> {
    let mut mapping: Vec<(usize, Column)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        match Column::from_source_header(header) {
            Some(col) if mapping.iter().any(|(_, c)| *c == col) => {
                warn!("Duplicate '{}' column at field {} ignored", header.trim(), idx);
            }
            Some(col) => mapping.push((idx, col)),
            None => debug!("Dropping unmapped column '{}'", header.trim()),
        }
    }
    mapping
}

pub fn detect_encoding(rows: &[StringRecord], idx: usize) -> CellEncoding {
    let all_plain = rows
        .iter()
        .map(|rec| rec.get(idx).unwrap_or_default())
        .filter(|cell| !cell.trim().is_empty())
        .all(|cell| parse_plain(cell).is_some());

    if all_plain {
        CellEncoding::Numeric
    } else {
        CellEncoding::Text
    }
}

/// A cell that is already a finite number.
pub fn parse_plain(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Keeps only digits and the decimal point, then parses.
/// `"€1,234.56"` -> `1234.56`, `"N/A"` -> `None`.
pub fn parse_formatted(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
