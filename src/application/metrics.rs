use crate::application::dto::{CvssMetricV2, CvssMetricV3, Metrics};
use crate::enrichment::domain::{
    AccessVector, Complexity, ExploitAssessment, ExploitMaturity, ImpactLevel, PrivilegeLevel,
    Severity,
};

/// Canonical projection of one CVSS metric entry.
///
/// Produced by [`extract`]; every field defaults to `Unknown`/0.0 so a
/// record without usable metrics yields a well-defined result instead of
/// an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanonicalMetrics {
    pub base_score: f64,
    pub base_severity: Severity,
    pub impact_score: f64,
    pub access: AccessVector,
    pub complexity: Complexity,
    pub privileges_required: PrivilegeLevel,
    pub integrity_impact: ImpactLevel,
    pub availability_impact: ImpactLevel,
    pub exploit: ExploitAssessment,
}

/// Projects a raw multi-version metrics payload into canonical fields.
///
/// Schema versions are tried in precedence order 3.1, 3.0, 2.0; the
/// first non-empty list wins and only its first entry is consulted.
/// Total function: absent or unusable data yields the defaults, never an
/// error.
pub fn extract(metrics: Option<&Metrics>) -> CanonicalMetrics {
    let Some(metrics) = metrics else {
        return CanonicalMetrics::default();
    };

    from_v3(&metrics.cvss_metric_v31)
        .or_else(|| from_v3(&metrics.cvss_metric_v30))
        .or_else(|| from_v2(&metrics.cvss_metric_v2))
        .unwrap_or_default()
}

/// CVSS 3.0 and 3.1 share vocabulary and layout, so one projection serves
/// both lists.
fn from_v3(list: &[CvssMetricV3]) -> Option<CanonicalMetrics> {
    let metric = list.first()?;
    let data = &metric.cvss_data;

    Some(CanonicalMetrics {
        base_score: data.base_score,
        base_severity: severity_from_text(&data.base_severity),
        impact_score: metric.impact_score,
        access: access_from_v3(&data.attack_vector),
        complexity: complexity_from_v3(&data.attack_complexity),
        privileges_required: privileges_from_v3(&data.privileges_required),
        integrity_impact: impact_from_v3(&data.integrity_impact),
        availability_impact: impact_from_v3(&data.availability_impact),
        exploit: ExploitAssessment {
            score: metric.exploitability_score,
            maturity: maturity_from_optional(data.exploit_code_maturity.as_deref()),
        },
    })
}

fn from_v2(list: &[CvssMetricV2]) -> Option<CanonicalMetrics> {
    let metric = list.first()?;
    let data = &metric.cvss_data;

    Some(CanonicalMetrics {
        base_score: data.base_score,
        // 2.0 carries no textual severity; band the numeric score instead.
        base_severity: Severity::from_score(data.base_score),
        impact_score: metric.impact_score,
        access: access_from_v2(&data.access_vector),
        complexity: complexity_from_v2(&data.access_complexity),
        // 2.0 has no privileges-required vocabulary.
        privileges_required: PrivilegeLevel::Unknown,
        integrity_impact: impact_from_v2(&data.integrity_impact),
        availability_impact: impact_from_v2(&data.availability_impact),
        exploit: ExploitAssessment {
            score: metric.exploitability_score,
            maturity: maturity_from_optional(data.exploitability.as_deref()),
        },
    })
}

// Mapping tables from NVD vocabulary to the canonical enumerations.
// Unexpected values land on `Unknown` rather than failing the record.

fn severity_from_text(severity: &str) -> Severity {
    match severity {
        "CRITICAL" => Severity::Critical,
        "HIGH" => Severity::High,
        "MEDIUM" => Severity::Medium,
        "LOW" => Severity::Low,
        "NONE" => Severity::None,
        _ => Severity::Unknown,
    }
}

fn access_from_v3(attack_vector: &str) -> AccessVector {
    match attack_vector {
        "NETWORK" => AccessVector::Network,
        "ADJACENT_NETWORK" => AccessVector::AdjacentNetwork,
        "LOCAL" => AccessVector::Local,
        "PHYSICAL" => AccessVector::Physical,
        _ => AccessVector::Unknown,
    }
}

/// The 2.0 vocabulary has no PHYSICAL vector.
fn access_from_v2(access_vector: &str) -> AccessVector {
    match access_vector {
        "NETWORK" => AccessVector::Network,
        "ADJACENT_NETWORK" => AccessVector::AdjacentNetwork,
        "LOCAL" => AccessVector::Local,
        _ => AccessVector::Unknown,
    }
}

fn complexity_from_v3(complexity: &str) -> Complexity {
    match complexity {
        "LOW" => Complexity::Low,
        "HIGH" => Complexity::High,
        _ => Complexity::Unknown,
    }
}

fn complexity_from_v2(complexity: &str) -> Complexity {
    match complexity {
        "LOW" => Complexity::Low,
        "MEDIUM" => Complexity::Medium,
        "HIGH" => Complexity::High,
        _ => Complexity::Unknown,
    }
}

fn privileges_from_v3(privileges: &str) -> PrivilegeLevel {
    match privileges {
        "NONE" => PrivilegeLevel::None,
        "LOW" => PrivilegeLevel::Low,
        "HIGH" => PrivilegeLevel::High,
        _ => PrivilegeLevel::Unknown,
    }
}

fn impact_from_v3(impact: &str) -> ImpactLevel {
    match impact {
        "HIGH" => ImpactLevel::High,
        "LOW" => ImpactLevel::Low,
        "NONE" => ImpactLevel::None,
        _ => ImpactLevel::Unknown,
    }
}

/// COMPLETE and PARTIAL predate the 3.x wording; they map to High and Low.
fn impact_from_v2(impact: &str) -> ImpactLevel {
    match impact {
        "COMPLETE" => ImpactLevel::High,
        "PARTIAL" => ImpactLevel::Low,
        "NONE" => ImpactLevel::None,
        _ => ImpactLevel::Unknown,
    }
}

/// Both CVSS generations use the same maturity vocabulary. A missing
/// temporal field maps to `Unknown`; an explicit NOT_DEFINED to
/// `Undefined`.
fn maturity_from_optional(maturity: Option<&str>) -> ExploitMaturity {
    match maturity {
        None => ExploitMaturity::Unknown,
        Some("HIGH") => ExploitMaturity::High,
        Some("FUNCTIONAL") => ExploitMaturity::Functional,
        Some("PROOF_OF_CONCEPT") => ExploitMaturity::ProofOfConcept,
        Some("UNPROVEN") => ExploitMaturity::Unproven,
        Some("NOT_DEFINED") => ExploitMaturity::Undefined,
        Some(_) => ExploitMaturity::Unknown,
    }
}
