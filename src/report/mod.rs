//! Reporting utilities: per-run tallies and the log summary line.

use crate::resolve::{Resolution, ResolvedCode};

/// Counts of resolved and unresolvable codes, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: usize,
    pub resolved: usize,
    pub unknown: usize,
    pub ambiguous: usize,
    pub insufficient: usize,
}

impl RunSummary {
    pub fn from_resolutions(resolutions: &[ResolvedCode]) -> Self {
        let mut summary = RunSummary {
            targets: resolutions.len(),
            ..RunSummary::default()
        };
        for r in resolutions {
            match r.resolution {
                Resolution::Resolved(_) => summary.resolved += 1,
                Resolution::UnknownPostalCode => summary.unknown += 1,
                Resolution::AmbiguousRegion { .. } => summary.ambiguous += 1,
                Resolution::InsufficientRates { .. } => summary.insufficient += 1,
            }
        }
        summary
    }

    pub fn unresolved(&self) -> usize {
        self.targets - self.resolved
    }
}

/// One-line summary suitable for the log.
pub fn format_run_summary(summary: &RunSummary) -> String {
    format!(
        "resolved {}/{} codes, {} left blank (unknown={}, ambiguous={}, insufficient_rates={})",
        summary.resolved,
        summary.targets,
        summary.unresolved(),
        summary.unknown,
        summary.ambiguous,
        summary.insufficient,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PostalCode, Rate, RatingRegion};

    fn resolved(code: &str, resolution: Resolution) -> ResolvedCode {
        ResolvedCode {
            postal_code: PostalCode::new(code),
            resolution,
        }
    }

    #[test]
    fn tallies_each_reason() {
        let rows = vec![
            resolved("a", Resolution::Resolved(Rate::from_cents(100).unwrap())),
            resolved("b", Resolution::UnknownPostalCode),
            resolved("c", Resolution::AmbiguousRegion { regions: 3 }),
            resolved("d", Resolution::InsufficientRates {
                region: RatingRegion::new("MO", 1),
                available: 1,
            }),
            resolved("a", Resolution::Resolved(Rate::from_cents(100).unwrap())),
        ];

        let summary = RunSummary::from_resolutions(&rows);
        assert_eq!(
            summary,
            RunSummary {
                targets: 5,
                resolved: 2,
                unknown: 1,
                ambiguous: 1,
                insufficient: 1,
            }
        );
        assert_eq!(summary.unresolved(), 3);
        assert_eq!(
            format_run_summary(&summary),
            "resolved 2/5 codes, 3 left blank (unknown=1, ambiguous=1, insufficient_rates=1)"
        );
    }
}
