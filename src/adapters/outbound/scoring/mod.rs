/// Scoring adapters implementing the risk model port
mod weighted_risk_model;

pub use weighted_risk_model::WeightedRiskModel;
