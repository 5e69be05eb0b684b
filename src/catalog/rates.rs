use std::collections::{BTreeSet, HashMap};

use crate::domain::{CoverageTier, PlanRecord, Rate, RatingRegion};

/// Distinct plan rates per `(region, tier)`.
///
/// Rates are kept in a `BTreeSet`, so duplicates collapse and iteration is
/// ascending.
#[derive(Debug, Clone, Default)]
pub struct RateCatalog {
    rates: HashMap<(RatingRegion, CoverageTier), BTreeSet<Rate>>,
}

impl RateCatalog {
    /// Build from decoded plan rows, stopping at the first error.
    ///
    /// No partial catalog is returned on failure.
    pub fn build<I, E>(records: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<PlanRecord, E>>,
    {
        let mut catalog = RateCatalog::default();
        for record in records {
            catalog.insert(record?);
        }
        Ok(catalog)
    }

    /// Build from already-typed plan records.
    pub fn from_plans<I>(plans: I) -> Self
    where
        I: IntoIterator<Item = PlanRecord>,
    {
        let mut catalog = RateCatalog::default();
        for plan in plans {
            catalog.insert(plan);
        }
        catalog
    }

    fn insert(&mut self, plan: PlanRecord) {
        self.rates
            .entry((plan.region, plan.tier))
            .or_default()
            .insert(plan.rate);
    }

    /// Distinct rates offered in `region` at `tier`, ascending.
    pub fn rates(&self, region: &RatingRegion, tier: CoverageTier) -> Option<&BTreeSet<Rate>> {
        // Tuple keys can't be borrowed piecewise, so look up with an owned key.
        self.rates.get(&(region.clone(), tier))
    }

    /// Second-smallest distinct rate, if at least two exist.
    pub fn second_lowest(&self, region: &RatingRegion, tier: CoverageTier) -> Option<Rate> {
        self.rates(region, tier)?.iter().nth(1).copied()
    }

    /// Number of `(region, tier)` keys.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
