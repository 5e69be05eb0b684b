//! Write resolved rates as `zipcode,rate` CSV.
//!
//! Unresolvable codes keep their row with an empty rate (`64148,`).

use std::io::Write;

use serde::Serialize;

use crate::error::AppError;
use crate::resolve::ResolvedCode;

/// Header line of the output.
pub const OUTPUT_HEADER: [&str; 2] = ["zipcode", "rate"];

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    zipcode: &'a str,
    rate: Option<String>,
}

/// Write the header plus one row per resolved code, in the given order.
pub fn write_results_csv<W: Write>(writer: W, results: &[ResolvedCode]) -> Result<(), AppError> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    out.write_record(OUTPUT_HEADER)
        .map_err(|e| AppError::new(4, format!("Failed to write output header: {e}")))?;

    for r in results {
        let row = OutputRow {
            zipcode: r.postal_code.as_str(),
            rate: r.resolution.rate().map(|rate| rate.to_string()),
        };
        out.serialize(row)
            .map_err(|e| AppError::new(4, format!("Failed to write output row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::new(4, format!("Failed to flush output: {e}")))?;
    Ok(())
}
