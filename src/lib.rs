//! nvd-enrich - NVD enrichment core for scanner findings
//!
//! This library enriches a minimal vulnerability record produced by an
//! upstream scanner with authoritative data from the National
//! Vulnerability Database: canonical identifiers, descriptions,
//! references, CVSS-derived severity and impact attributes, and a
//! computed risk indicator.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`enrichment`): Canonical vulnerability model, CPE
//!   identifiers and pure derivation rules
//! - **Application Layer** (`application`): The enrichment use case,
//!   CVSS metric reconciliation and wire-format DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use nvd_enrich::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), EnrichmentError> {
//! let client = NvdClient::new()?;
//! let use_case = EnrichVulnerabilityUseCase::new(client, WeightedRiskModel::new());
//!
//! // Normalize the scanner's loose CPE, validate it and query the NVD.
//! let response = use_case
//!     .fetch_by_legacy_cpe("cpe:/o:microsoft:windows_10:1607")
//!     .await?;
//!
//! // Enrich one caller-owned record per matching CVE.
//! let mut findings = Vec::new();
//! for entry in &response.vulnerabilities {
//!     let mut finding = CanonicalVulnerability::default();
//!     use_case.enrich(&mut finding, &entry.cve)?;
//!     findings.push(finding);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod enrichment;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::NvdClient;
    pub use crate::adapters::outbound::scoring::WeightedRiskModel;
    pub use crate::application::dto::{CveRecord, NvdApiResponse};
    pub use crate::application::metrics::CanonicalMetrics;
    pub use crate::application::use_cases::EnrichVulnerabilityUseCase;
    pub use crate::enrichment::domain::{
        normalize_legacy, AccessVector, CanonicalVulnerability, Complexity, Cpe,
        ExploitAssessment, ExploitMaturity, ImpactLevel, Likelihood, PrivilegeLevel, Severity,
        VendorComment,
    };
    pub use crate::enrichment::policies::derive_likelihood;
    pub use crate::ports::outbound::{RiskModel, VulnerabilitySource};
    pub use crate::shared::error::{CpeError, EnrichmentError, NvdError};
}
