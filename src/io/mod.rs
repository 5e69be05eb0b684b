//! Input/output helpers.
//!
//! - CSV ingest + row decoding (`ingest`)
//! - result export as CSV (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
