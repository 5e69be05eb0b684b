//! Lookup tables built once per run from decoded input rows.
//!
//! - `RateCatalog`: `(region, tier)` → distinct rates, ascending
//! - `RegionIndex`: postal code → distinct rating regions
//!
//! Both are read-only once built; the resolver only borrows them.

pub mod rates;
pub mod regions;

pub use rates::*;
pub use regions::*;
