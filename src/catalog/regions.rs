use std::collections::{HashMap, HashSet};

use crate::domain::{PostalCode, RatingRegion, ZipRecord};

/// Postal code → every distinct rating region it falls in.
///
/// A code that straddles a county line can legitimately map to several regions.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    regions: HashMap<PostalCode, HashSet<RatingRegion>>,
}

impl RegionIndex {
    /// Build from decoded zip rows, stopping at the first error.
    pub fn build<I, E>(records: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<ZipRecord, E>>,
    {
        let mut index = RegionIndex::default();
        for record in records {
            index.insert(record?);
        }
        Ok(index)
    }

    /// Build from already-typed zip records.
    pub fn from_zips<I>(zips: I) -> Self
    where
        I: IntoIterator<Item = ZipRecord>,
    {
        let mut index = RegionIndex::default();
        for zip in zips {
            index.insert(zip);
        }
        index
    }

    fn insert(&mut self, zip: ZipRecord) {
        self.regions.entry(zip.postal_code).or_default().insert(zip.region);
    }

    pub fn regions(&self, postal_code: &PostalCode) -> Option<&HashSet<RatingRegion>> {
        self.regions.get(postal_code)
    }

    /// Number of distinct postal codes.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
