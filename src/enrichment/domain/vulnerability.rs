use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Qualitative severity of a vulnerability, unified across CVSS versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Unknown,
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Bands a numeric CVSS base score into a qualitative severity.
    ///
    /// CVSS 2.0 metrics carry no textual severity field, so for those
    /// records the severity is derived from the base score using the
    /// standard rating bands.
    pub fn from_score(score: f64) -> Self {
        if score <= 0.0 {
            Severity::None
        } else if score < 4.0 {
            Severity::Low
        } else if score < 7.0 {
            Severity::Medium
        } else if score < 9.0 {
            Severity::High
        } else {
            Severity::Critical
        }
    }
}

/// How a vulnerability is reached by an attacker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessVector {
    #[default]
    Unknown,
    Network,
    AdjacentNetwork,
    Local,
    Physical,
}

/// How hard a successful attack is to pull off.
///
/// `Medium` only occurs for CVSS 2.0 records; the 3.x vocabularies know
/// only low and high.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
}

/// Privilege level an attacker must hold before exploitation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrivilegeLevel {
    #[default]
    Unknown,
    None,
    Low,
    High,
}

/// Degree of impact on integrity or availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    #[default]
    Unknown,
    None,
    Low,
    High,
}

/// Maturity of publicly known exploit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExploitMaturity {
    #[default]
    Unknown,
    Unproven,
    ProofOfConcept,
    Functional,
    High,
    Undefined,
}

/// Qualitative chance that a vulnerability gets exploited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Likelihood {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Exploitability sub-score paired with the exploit code maturity category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExploitAssessment {
    pub score: f64,
    pub maturity: ExploitMaturity,
}

/// A vendor remediation comment whose timestamp parsed successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorComment {
    pub organization: String,
    pub comment: String,
    pub last_modified: NaiveDateTime,
}

/// The scanner-owned vulnerability record that enrichment fills in.
///
/// Every enumerated field starts at its `Unknown` variant and every score
/// at 0.0. Enrichment either derives a value or leaves the default in
/// place; absent source data never produces a non-`Unknown` value.
///
/// The record is created once per scan finding and mutated exactly once
/// by the enrichment use case; it is never shared between concurrent
/// enrichment calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalVulnerability {
    /// Canonical CVE identifier, e.g. `CVE-2017-0144`.
    pub id: String,
    /// NVD source identifier of the reporting organization.
    pub source_identifier: String,
    /// English description, empty when the record carries none.
    pub description: String,
    /// Reference URLs in source order, not deduplicated.
    pub references: Vec<String>,
    pub base_score: f64,
    pub base_severity: Severity,
    pub impact_score: f64,
    pub access: AccessVector,
    pub complexity: Complexity,
    pub privileges_required: PrivilegeLevel,
    pub integrity_impact: ImpactLevel,
    pub availability_impact: ImpactLevel,
    pub exploit: ExploitAssessment,
    pub published: Option<NaiveDateTime>,
    pub last_updated: Option<NaiveDateTime>,
    pub likelihood: Likelihood,
    pub risk_score: f64,
    pub vendor_comments: Vec<VendorComment>,
}
