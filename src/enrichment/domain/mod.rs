pub mod cpe;
pub mod vulnerability;

pub use cpe::{normalize_legacy, Cpe};
pub use vulnerability::{
    AccessVector, CanonicalVulnerability, Complexity, ExploitAssessment, ExploitMaturity,
    ImpactLevel, Likelihood, PrivilegeLevel, Severity, VendorComment,
};
