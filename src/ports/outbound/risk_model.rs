use crate::enrichment::domain::{ImpactLevel, Likelihood};

/// RiskModel port for the platform-wide risk-scoring formula
///
/// The formula is owned by the wider platform; the enrichment core only
/// guarantees it is invoked with the freshly derived likelihood and the
/// canonical integrity/availability impacts of the record being enriched.
pub trait RiskModel: Send + Sync {
    /// Computes a risk score for one vulnerability.
    fn score(
        &self,
        likelihood: Likelihood,
        integrity_impact: ImpactLevel,
        availability_impact: ImpactLevel,
    ) -> f64;
}
