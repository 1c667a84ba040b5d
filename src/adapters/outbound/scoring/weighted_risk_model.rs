use crate::enrichment::domain::{ImpactLevel, Likelihood};
use crate::ports::outbound::RiskModel;

/// Default risk model: likelihood weight scaled by the mean of the
/// integrity and availability impact weights, on a 0-10 scale.
///
/// Stands in for the platform-wide formula when the host does not inject
/// its own [`RiskModel`]; deployments with a shared scoring service
/// provide their own implementation of the port instead.
pub struct WeightedRiskModel;

impl WeightedRiskModel {
    pub fn new() -> Self {
        Self
    }

    fn likelihood_weight(likelihood: Likelihood) -> f64 {
        match likelihood {
            Likelihood::Unknown => 0.0,
            Likelihood::Low => 0.25,
            Likelihood::Medium => 0.5,
            Likelihood::High => 0.75,
            Likelihood::VeryHigh => 1.0,
        }
    }

    fn impact_weight(impact: ImpactLevel) -> f64 {
        match impact {
            ImpactLevel::Unknown | ImpactLevel::None => 0.0,
            ImpactLevel::Low => 5.0,
            ImpactLevel::High => 10.0,
        }
    }
}

impl Default for WeightedRiskModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskModel for WeightedRiskModel {
    fn score(
        &self,
        likelihood: Likelihood,
        integrity_impact: ImpactLevel,
        availability_impact: ImpactLevel,
    ) -> f64 {
        let impact =
            (Self::impact_weight(integrity_impact) + Self::impact_weight(availability_impact)) / 2.0;
        Self::likelihood_weight(likelihood) * impact
    }
}
