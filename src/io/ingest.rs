//! CSV ingest and row decoding.
//!
//! This module turns the three input files into typed records:
//!
//! - plans:   `plan_id,state,metal_level,rate,rate_area`
//! - zips:    `zipcode,state,county_code,name,rate_area`
//! - targets: `zipcode,rate`
//!
//! Every file carries a header row, which is skipped. Decoding is strict: a row
//! with the wrong field count, an unknown tier or a malformed number is a hard
//! error naming the file and line. Nothing here knows about catalogs or
//! resolution.

use std::fs::File;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::{CoverageTier, PlanRecord, PostalCode, Rate, RatingRegion, StateCode, TargetRecord, ZipRecord};
use crate::error::{DecodeError, IngestError};

/// Expected field count of a plans row.
pub const PLAN_FIELDS: usize = 5;
/// Expected field count of a zips row.
pub const ZIP_FIELDS: usize = 5;
/// Expected field count of a target row.
pub const TARGET_FIELDS: usize = 2;

/// A raw row plus its 1-based line number in the source file.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub line: u64,
    pub record: StringRecord,
}

/// Read every data row of `path` into memory (header skipped).
///
/// The reader is flexible so that field-count mismatches surface as
/// `DecodeError::FieldCount` with our own message instead of a csv error.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        // Header sits on line 1, so the first record is line 2.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(rows.len() as u64 + 2);
        rows.push(RawRow { line, record });
    }

    debug!(path = %path.display(), rows = rows.len(), "read input rows");
    Ok(rows)
}

/// Decode rows with `decode`, attaching file/line context to failures.
///
/// Returned lazily so builders can stop at the first error.
pub fn decode_rows<'a, T>(
    path: &'a Path,
    rows: &'a [RawRow],
    decode: fn(&StringRecord) -> Result<T, DecodeError>,
) -> impl Iterator<Item = Result<T, IngestError>> + 'a
where
    T: 'a,
{
    rows.iter().map(move |row| {
        decode(&row.record).map_err(|source| IngestError::Row {
            path: path.to_path_buf(),
            line: row.line,
            source,
        })
    })
}

/// Decode a plans row.
pub fn decode_plan(record: &StringRecord) -> Result<PlanRecord, DecodeError> {
    ensure_field_count(record, PLAN_FIELDS)?;

    let state = field(record, 1);
    let tier: CoverageTier = field(record, 2).parse()?;
    let rate: Rate = field(record, 3).parse()?;
    let number = parse_region_number(field(record, 4))?;

    Ok(PlanRecord {
        plan_id: field(record, 0).to_string(),
        region: RatingRegion {
            state: StateCode(state.to_string()),
            number,
        },
        tier,
        rate,
    })
}

/// Decode a zips row.
pub fn decode_zip(record: &StringRecord) -> Result<ZipRecord, DecodeError> {
    ensure_field_count(record, ZIP_FIELDS)?;

    let number = parse_region_number(field(record, 4))?;

    Ok(ZipRecord {
        postal_code: PostalCode::new(field(record, 0)),
        region: RatingRegion {
            state: StateCode(field(record, 1).to_string()),
            number,
        },
        county_code: field(record, 2).to_string(),
        name: field(record, 3).to_string(),
    })
}

/// Decode a target row.
pub fn decode_target(record: &StringRecord) -> Result<TargetRecord, DecodeError> {
    ensure_field_count(record, TARGET_FIELDS)?;

    Ok(TargetRecord {
        postal_code: PostalCode::new(field(record, 0)),
        reserved: field(record, 1).to_string(),
    })
}

/// Load and decode the target file, failing on the first bad row.
pub fn load_targets(path: &Path) -> Result<Vec<TargetRecord>, IngestError> {
    let rows = read_rows(path)?;
    decode_rows(path, &rows, decode_target).collect()
}

fn ensure_field_count(record: &StringRecord, expected: usize) -> Result<(), DecodeError> {
    if record.len() != expected {
        return Err(DecodeError::FieldCount {
            expected,
            actual: record.len(),
        });
    }
    Ok(())
}

// Callers check the field count first, so the index is always in range.
fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn parse_region_number(s: &str) -> Result<u32, DecodeError> {
    // `u32::from_str` accepts a leading '+'; the region column never carries a sign.
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::MalformedNumber {
            field: "rate_area",
            value: s.to_string(),
        });
    }
    s.parse().map_err(|_| DecodeError::MalformedNumber {
        field: "rate_area",
        value: s.to_string(),
    })
}
