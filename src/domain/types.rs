//! Shared domain types.
//!
//! These are the typed values the row decoders produce and the catalog/resolver
//! consume. Everything here is plain data: parsing is strict, equality and
//! hashing are structural.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Level of coverage a plan provides (the "metal level").
///
/// Parsing is exact: `Silver` is accepted, `silver` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoverageTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Catastrophic,
}

impl CoverageTier {
    pub const ALL: [CoverageTier; 5] = [
        CoverageTier::Bronze,
        CoverageTier::Silver,
        CoverageTier::Gold,
        CoverageTier::Platinum,
        CoverageTier::Catastrophic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageTier::Bronze => "Bronze",
            CoverageTier::Silver => "Silver",
            CoverageTier::Gold => "Gold",
            CoverageTier::Platinum => "Platinum",
            CoverageTier::Catastrophic => "Catastrophic",
        }
    }
}

impl fmt::Display for CoverageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverageTier {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoverageTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| DecodeError::MalformedTier(s.to_string()))
    }
}

/// Two-letter state abbreviation, e.g. `MO`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateCode(pub String);

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geographic rating region: `(state, number)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RatingRegion {
    pub state: StateCode,
    pub number: u32,
}

impl RatingRegion {
    pub fn new(state: impl Into<String>, number: u32) -> Self {
        Self {
            state: StateCode(state.into()),
            number,
        }
    }
}

impl fmt::Display for RatingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.state, self.number)
    }
}

/// Postal (ZIP) code. Opaque: `"01234"` keeps its leading zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostalCode(pub String);

impl PostalCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monthly premium as a fixed-point amount.
///
/// Stored in ten-thousandths of a currency unit so equality and ordering are
/// exact integer comparisons. Input digits past the fourth decimal are rounded
/// half up at parse time. Rendering rounds to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rate(u64);

impl Rate {
    /// Fractional digits kept internally.
    pub const FRACTION_DIGITS: u32 = 4;
    const SCALE: u64 = 10_u64.pow(Self::FRACTION_DIGITS);
    const PER_CENT: u64 = Self::SCALE / 100;

    /// Build a rate from whole cents; `None` if it does not fit.
    pub fn from_cents(cents: u64) -> Option<Self> {
        cents.checked_mul(Self::PER_CENT).map(Rate)
    }

    /// Value rounded half away from zero to whole cents.
    pub fn cents(self) -> u64 {
        // Widened so the rounding bias cannot overflow near `u64::MAX`.
        ((u128::from(self.0) + u128::from(Self::PER_CENT / 2)) / u128::from(Self::PER_CENT)) as u64
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        write!(f, "{}.{:02}", cents / 100, cents % 100)
    }
}

impl FromStr for Rate {
    type Err = DecodeError;

    /// Accepts `123`, `123.45`, `.5`, `1.` and an optional leading `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DecodeError::MalformedNumber {
            field: "rate",
            value: s.to_string(),
        };

        let digits = s.strip_prefix('+').unwrap_or(s);
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(malformed());
        }

        let keep = frac.len().min(Self::FRACTION_DIGITS as usize);
        let (kept, dropped) = frac.split_at(keep);

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| malformed())?
        };
        // Right-pad so "245.2" and "245.2000" land on the same integer.
        let frac_scaled = if kept.is_empty() {
            0
        } else {
            let pad = Self::FRACTION_DIGITS - keep as u32;
            kept.parse::<u64>().map_err(|_| malformed())? * 10_u64.pow(pad)
        };
        let round_up = u64::from(dropped.as_bytes().first().is_some_and(|&b| b >= b'5'));

        whole
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(frac_scaled))
            .and_then(|v| v.checked_add(round_up))
            .map(Rate)
            .ok_or_else(malformed)
    }
}

/// One decoded row of the plans file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRecord {
    /// Carried for diagnostics only.
    pub plan_id: String,
    pub region: RatingRegion,
    pub tier: CoverageTier,
    pub rate: Rate,
}

/// One decoded row of the zips file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipRecord {
    pub postal_code: PostalCode,
    pub region: RatingRegion,
    pub county_code: String,
    pub name: String,
}

/// One decoded row of the target (slcsp) file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRecord {
    pub postal_code: PostalCode,
    /// Second column of the target file. Read but never interpreted.
    pub reserved: String,
}

/// A full run's configuration as understood by the pipeline.
///
/// Derived from CLI flags (plus defaults / environment).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub plan_file: PathBuf,
    pub zip_file: PathBuf,
    pub target_file: PathBuf,
    pub tier: CoverageTier,
}
