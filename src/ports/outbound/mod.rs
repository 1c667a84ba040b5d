/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the enrichment core uses to
/// reach external systems (the NVD API, the shared risk formula).
pub mod risk_model;
pub mod vulnerability_source;

pub use risk_model::RiskModel;
pub use vulnerability_source::VulnerabilitySource;
