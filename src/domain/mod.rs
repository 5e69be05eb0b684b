//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the coverage tier enum (`CoverageTier`)
//! - lookup keys (`RatingRegion`, `PostalCode`) and the fixed-point `Rate`
//! - typed input records (`PlanRecord`, `ZipRecord`, `TargetRecord`)
//! - run configuration (`RunConfig`)

pub mod types;

pub use types::*;
