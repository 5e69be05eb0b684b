//! Resolve a postal code to the second-lowest distinct rate at a tier.
//!
//! Rules:
//! - the code must map to exactly one rating region (0 = unknown, 2+ = ambiguous)
//! - that region must offer at least two distinct rates at the tier
//! - the answer is the second-smallest distinct rate
//!
//! Unresolvable codes are normal outcomes, not errors.

use tracing::debug;

use crate::catalog::{RateCatalog, RegionIndex};
use crate::domain::{CoverageTier, PostalCode, Rate, RatingRegion};

/// Outcome of resolving one postal code, with the reason when there is no rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Rate),
    /// The code is not in the region index.
    UnknownPostalCode,
    /// The code spans `regions` rating regions; we never guess between them.
    AmbiguousRegion { regions: usize },
    /// Fewer than two distinct rates exist for the region at the tier.
    InsufficientRates { region: RatingRegion, available: usize },
}

impl Resolution {
    pub fn rate(&self) -> Option<Rate> {
        match self {
            Resolution::Resolved(rate) => Some(*rate),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// A target postal code paired with its resolution, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCode {
    pub postal_code: PostalCode,
    pub resolution: Resolution,
}

/// Second-lowest distinct rate for `postal_code` at `tier`, if determinable.
pub fn resolve(
    postal_code: &PostalCode,
    index: &RegionIndex,
    catalog: &RateCatalog,
    tier: CoverageTier,
) -> Option<Rate> {
    explain(postal_code, index, catalog, tier).rate()
}

/// Same decision as [`resolve`], keeping the reason for unresolvable codes.
pub fn explain(
    postal_code: &PostalCode,
    index: &RegionIndex,
    catalog: &RateCatalog,
    tier: CoverageTier,
) -> Resolution {
    let Some(regions) = index.regions(postal_code) else {
        return Resolution::UnknownPostalCode;
    };

    let mut iter = regions.iter();
    let region = match (iter.next(), iter.next()) {
        (Some(region), None) => region,
        (None, _) => return Resolution::UnknownPostalCode,
        (Some(_), Some(_)) => {
            return Resolution::AmbiguousRegion {
                regions: regions.len(),
            };
        }
    };

    match catalog.second_lowest(region, tier) {
        Some(rate) => Resolution::Resolved(rate),
        None => Resolution::InsufficientRates {
            region: region.clone(),
            available: catalog.rates(region, tier).map_or(0, |set| set.len()),
        },
    }
}

/// Resolve every target, preserving input order (duplicates included).
pub fn resolve_all<'a, I>(
    targets: I,
    index: &RegionIndex,
    catalog: &RateCatalog,
    tier: CoverageTier,
) -> Vec<ResolvedCode>
where
    I: IntoIterator<Item = &'a PostalCode>,
{
    targets
        .into_iter()
        .map(|postal_code| {
            let resolution = explain(postal_code, index, catalog, tier);
            if !resolution.is_resolved() {
                debug!(zipcode = %postal_code, ?resolution, "unresolvable");
            }
            ResolvedCode {
                postal_code: postal_code.clone(),
                resolution,
            }
        })
        .collect()
}
