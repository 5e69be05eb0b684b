//! Command-line parsing.
//!
//! The three input paths can come from flags, the environment (or a `.env`
//! file), or fall back to the bundled sample data.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PLAN_FILE: &str = "testdata/plans.csv";
pub const DEFAULT_ZIP_FILE: &str = "testdata/zips.csv";
pub const DEFAULT_TARGET_FILE: &str = "testdata/slcsp.csv";

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "slcsp",
    version,
    about = "Second-lowest-cost Silver plan premium per ZIP code"
)]
pub struct Cli {
    /// File containing all the health plans.
    #[arg(long, alias = "planFile", env = "SLCSP_PLAN_FILE", default_value = DEFAULT_PLAN_FILE)]
    pub plan_file: PathBuf,

    /// File mapping ZIP code to county/counties and rate area(s).
    #[arg(long, alias = "zipCodeFile", env = "SLCSP_ZIP_FILE", default_value = DEFAULT_ZIP_FILE)]
    pub zip_file: PathBuf,

    /// File listing the ZIP codes to compute.
    #[arg(long, alias = "slcspFile", env = "SLCSP_TARGET_FILE", default_value = DEFAULT_TARGET_FILE)]
    pub slcsp_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_legacy_camel_case_flags() {
        let cli = Cli::try_parse_from(["slcsp", "--planFile", "p.csv", "--zip-file", "z.csv"]).unwrap();
        assert_eq!(cli.plan_file, PathBuf::from("p.csv"));
        assert_eq!(cli.zip_file, PathBuf::from("z.csv"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["slcsp", "--tier", "Gold"]).is_err());
    }
}
