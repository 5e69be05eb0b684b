//! Shared load -> build -> resolve workflow.
//!
//! Everything that can fail fatally (file access, row decoding) happens here,
//! before any output is produced.

use tracing::info;

use crate::catalog::{RateCatalog, RegionIndex};
use crate::domain::RunConfig;
use crate::error::IngestError;
use crate::io::ingest::{decode_plan, decode_rows, decode_zip, load_targets, read_rows};
use crate::report::RunSummary;
use crate::resolve::{ResolvedCode, resolve_all};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub results: Vec<ResolvedCode>,
    pub summary: RunSummary,
}

/// Load the three inputs, build both lookup tables and resolve every target.
pub fn run(config: &RunConfig) -> Result<RunOutput, IngestError> {
    let catalog = load_rate_catalog(config)?;
    let index = load_region_index(config)?;
    let targets = load_targets(&config.target_file)?;
    info!(
        rate_keys = catalog.len(),
        postal_codes = index.len(),
        targets = targets.len(),
        tier = %config.tier,
        "inputs loaded"
    );

    let results = resolve_all(
        targets.iter().map(|t| &t.postal_code),
        &index,
        &catalog,
        config.tier,
    );
    let summary = RunSummary::from_resolutions(&results);

    Ok(RunOutput {
        results,
        summary,
    })
}

/// Read and decode the plans file into a `RateCatalog`.
pub fn load_rate_catalog(config: &RunConfig) -> Result<RateCatalog, IngestError> {
    let path = config.plan_file.as_path();
    let rows = read_rows(path)?;
    RateCatalog::build(decode_rows(path, &rows, decode_plan))
}

/// Read and decode the zips file into a `RegionIndex`.
pub fn load_region_index(config: &RunConfig) -> Result<RegionIndex, IngestError> {
    let path = config.zip_file.as_path();
    let rows = read_rows(path)?;
    RegionIndex::build(decode_rows(path, &rows, decode_zip))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::domain::{CoverageTier, Rate};
    use crate::error::DecodeError;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    fn config(dir: &TempDir, plans: &str, zips: &str, targets: &str) -> RunConfig {
        RunConfig {
            plan_file: write(dir, "plans.csv", plans),
            zip_file: write(dir, "zips.csv", zips),
            target_file: write(dir, "slcsp.csv", targets),
            tier: CoverageTier::Silver,
        }
    }

    const PLANS: &str = "plan_id,state,metal_level,rate,rate_area
P1,XX,Silver,200.0,1
P2,XX,Silver,150.0,1
P3,XX,Silver,300.0,1
P4,XX,Silver,250.0,2
P5,XX,Silver,260.0,2
P6,XX,Silver,120.0,3
P7,XX,Gold,90.0,3
";

    const ZIPS: &str = "zipcode,state,county_code,name,rate_area
Z1,XX,001,Alpha,1
Z2,XX,001,Alpha,1
Z2,XX,002,Beta,2
Z3,XX,003,Gamma,3
";

    #[test]
    fn scenarios_resolve_end_to_end() {
        crate::logging::init_test();
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, PLANS, ZIPS, "zipcode,rate\nZ1,\nZ2,\nZ3,\nZ9,\nZ1,\n");

        let run = run(&cfg).unwrap();
        let rates: Vec<(String, Option<Rate>)> = run
            .results
            .iter()
            .map(|r| (r.postal_code.to_string(), r.resolution.rate()))
            .collect();
        assert_eq!(
            rates,
            vec![
                ("Z1".to_string(), Some(Rate::from_cents(20_000).unwrap())),
                ("Z2".to_string(), None),
                ("Z3".to_string(), None),
                ("Z9".to_string(), None),
                ("Z1".to_string(), Some(Rate::from_cents(20_000).unwrap())),
            ]
        );
        assert_eq!(run.summary.resolved, 2);
        assert_eq!(run.summary.ambiguous, 1);
        assert_eq!(run.summary.insufficient, 1);
        assert_eq!(run.summary.unknown, 1);
    }

    #[test]
    fn short_plan_row_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let plans = "plan_id,state,metal_level,rate,rate_area\nP1,XX,Silver,200.0,1\nP2,XX,Silver,150.0\n";
        let cfg = config(&dir, plans, ZIPS, "zipcode,rate\nZ1,\n");

        let err = run(&cfg).unwrap_err();
        assert_eq!(
            err.decode_error(),
            Some(&DecodeError::FieldCount { expected: 5, actual: 4 })
        );
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn extra_rate_precision_is_rounded_not_fatal() {
        let dir = TempDir::new().unwrap();
        let plans = "plan_id,state,metal_level,rate,rate_area
P1,XX,Silver,150.12345,1
P2,XX,Silver,199.99996,1
P3,XX,Silver,.5,1
";
        let cfg = config(&dir, plans, ZIPS, "zipcode,rate\nZ1,\n");

        let run = run(&cfg).unwrap();
        assert_eq!(run.results[0].resolution.rate(), Some("150.1235".parse().unwrap()));
        assert_eq!(run.summary.resolved, 1);
    }

    #[test]
    fn unknown_tier_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let plans = "plan_id,state,metal_level,rate,rate_area\nP1,XX,Tin,200.0,1\n";
        let cfg = config(&dir, plans, ZIPS, "zipcode,rate\nZ1,\n");

        let err = run(&cfg).unwrap_err();
        assert_eq!(err.decode_error(), Some(&DecodeError::MalformedTier("Tin".to_string())));
    }

    #[test]
    fn malformed_region_number_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let zips = "zipcode,state,county_code,name,rate_area\nZ1,XX,001,Alpha,first\n";
        let cfg = config(&dir, PLANS, zips, "zipcode,rate\nZ1,\n");

        let err = run(&cfg).unwrap_err();
        assert!(matches!(
            err.decode_error(),
            Some(DecodeError::MalformedNumber { field: "rate_area", .. })
        ));
    }
}
