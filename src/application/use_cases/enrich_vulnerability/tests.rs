use super::*;
use crate::enrichment::domain::{
    AccessVector, Complexity, ExploitMaturity, ImpactLevel, Likelihood, PrivilegeLevel, Severity,
};
use crate::shared::error::{CpeError, NvdError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct MockVulnerabilitySource {
    response: NvdApiResponse,
    calls: Arc<AtomicUsize>,
}

impl MockVulnerabilitySource {
    fn new(response: NvdApiResponse) -> Self {
        Self {
            response,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn empty() -> Self {
        Self::new(response_from_json(r#"{"vulnerabilities": []}"#))
    }

    fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl VulnerabilitySource for MockVulnerabilitySource {
    async fn fetch_by_cpe(&self, _cpe: &Cpe) -> Result<NvdApiResponse, NvdError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Records the arguments the use case hands to the risk formula.
struct RecordingRiskModel {
    calls: Arc<Mutex<Vec<(Likelihood, ImpactLevel, ImpactLevel)>>>,
    fixed_score: f64,
}

impl RecordingRiskModel {
    fn new(fixed_score: f64) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fixed_score,
        }
    }

    fn call_log(&self) -> Arc<Mutex<Vec<(Likelihood, ImpactLevel, ImpactLevel)>>> {
        self.calls.clone()
    }
}

impl RiskModel for RecordingRiskModel {
    fn score(
        &self,
        likelihood: Likelihood,
        integrity_impact: ImpactLevel,
        availability_impact: ImpactLevel,
    ) -> f64 {
        self.calls
            .lock()
            .unwrap()
            .push((likelihood, integrity_impact, availability_impact));
        self.fixed_score
    }
}

fn response_from_json(json: &str) -> NvdApiResponse {
    serde_json::from_str(json).unwrap()
}

fn record_from_json(json: &str) -> CveRecord {
    serde_json::from_str(json).unwrap()
}

fn full_record() -> CveRecord {
    record_from_json(
        r#"{
            "id": "CVE-2017-0144",
            "sourceIdentifier": "secure@microsoft.com",
            "published": "2017-03-16T22:59:00.253",
            "lastModified": "2024-07-24T17:07:47.123",
            "descriptions": [
                {"lang": "es", "value": "El servidor SMBv1 permite ejecutar codigo."},
                {"lang": "en", "value": "The SMBv1 server allows remote code execution."}
            ],
            "references": [
                {"url": "https://example.com/advisory"},
                {"url": "https://example.com/advisory"},
                {"url": "https://example.com/patch"}
            ],
            "vendorComments": [
                {
                    "organization": "Microsoft",
                    "comment": "Fixed in MS17-010.",
                    "lastModified": "2017-03-17T00:00:00"
                }
            ],
            "metrics": {
                "cvssMetricV31": [
                    {
                        "cvssData": {
                            "baseScore": 8.8,
                            "baseSeverity": "HIGH",
                            "attackVector": "NETWORK",
                            "attackComplexity": "LOW",
                            "privilegesRequired": "NONE",
                            "integrityImpact": "HIGH",
                            "availabilityImpact": "HIGH",
                            "exploitCodeMaturity": "FUNCTIONAL"
                        },
                        "exploitabilityScore": 2.8,
                        "impactScore": 5.9
                    }
                ]
            }
        }"#,
    )
}

fn use_case_with_score(
    fixed_score: f64,
) -> EnrichVulnerabilityUseCase<MockVulnerabilitySource, RecordingRiskModel> {
    EnrichVulnerabilityUseCase::new(
        MockVulnerabilitySource::empty(),
        RecordingRiskModel::new(fixed_score),
    )
}

#[test]
fn test_enrich_populates_all_fields_from_full_record() {
    let use_case = use_case_with_score(4.2);

    let mut target = CanonicalVulnerability::default();
    use_case.enrich(&mut target, &full_record()).unwrap();

    assert_eq!(target.id, "CVE-2017-0144");
    assert_eq!(target.source_identifier, "secure@microsoft.com");
    assert_eq!(
        target.description,
        "The SMBv1 server allows remote code execution."
    );
    // References verbatim: order preserved, duplicates kept.
    assert_eq!(
        target.references,
        vec![
            "https://example.com/advisory",
            "https://example.com/advisory",
            "https://example.com/patch"
        ]
    );
    assert_eq!(target.base_score, 8.8);
    assert_eq!(target.base_severity, Severity::High);
    assert_eq!(target.impact_score, 5.9);
    assert_eq!(target.access, AccessVector::Network);
    assert_eq!(target.complexity, Complexity::Low);
    assert_eq!(target.privileges_required, PrivilegeLevel::None);
    assert_eq!(target.integrity_impact, ImpactLevel::High);
    assert_eq!(target.availability_impact, ImpactLevel::High);
    assert_eq!(target.exploit.score, 2.8);
    assert_eq!(target.exploit.maturity, ExploitMaturity::Functional);
    assert_eq!(
        target.published.unwrap().to_string(),
        "2017-03-16 22:59:00.253"
    );
    assert_eq!(
        target.last_updated.unwrap().to_string(),
        "2024-07-24 17:07:47.123"
    );
    assert_eq!(target.likelihood, Likelihood::VeryHigh);
    assert_eq!(target.risk_score, 4.2);
    assert_eq!(target.vendor_comments.len(), 1);
    assert_eq!(target.vendor_comments[0].organization, "Microsoft");
}

#[test]
fn test_risk_model_receives_just_derived_values() {
    let risk_model = RecordingRiskModel::new(0.0);
    let call_log = risk_model.call_log();
    let use_case = EnrichVulnerabilityUseCase::new(MockVulnerabilitySource::empty(), risk_model);

    let mut target = CanonicalVulnerability::default();
    use_case.enrich(&mut target, &full_record()).unwrap();

    let calls = call_log.lock().unwrap();
    assert_eq!(
        calls.as_slice(),
        &[(Likelihood::VeryHigh, ImpactLevel::High, ImpactLevel::High)]
    );
}

#[test]
fn test_enrich_without_metrics_keeps_unknown_defaults() {
    let use_case = use_case_with_score(0.0);

    let record = record_from_json(
        r#"{
            "id": "CVE-2024-0001",
            "published": "2024-01-15T10:30:00.000",
            "lastModified": "2024-01-16T10:30:00.000"
        }"#,
    );

    let mut target = CanonicalVulnerability::default();
    use_case.enrich(&mut target, &record).unwrap();

    assert_eq!(target.base_score, 0.0);
    assert_eq!(target.base_severity, Severity::Unknown);
    assert_eq!(target.access, AccessVector::Unknown);
    assert_eq!(target.complexity, Complexity::Unknown);
    assert_eq!(target.privileges_required, PrivilegeLevel::Unknown);
    assert_eq!(target.integrity_impact, ImpactLevel::Unknown);
    assert_eq!(target.availability_impact, ImpactLevel::Unknown);
    assert_eq!(target.exploit.maturity, ExploitMaturity::Unknown);
    assert_eq!(target.likelihood, Likelihood::Unknown);
    assert!(target.description.is_empty());
    assert!(target.references.is_empty());
    assert!(target.vendor_comments.is_empty());
}

#[test]
fn test_enrich_without_english_description_leaves_it_empty() {
    let use_case = use_case_with_score(0.0);

    let record = record_from_json(
        r#"{
            "id": "CVE-2024-0002",
            "published": "2024-01-15T10:30:00.000",
            "lastModified": "2024-01-16T10:30:00.000",
            "descriptions": [{"lang": "es", "value": "Solo espanol."}]
        }"#,
    );

    let mut target = CanonicalVulnerability::default();
    use_case.enrich(&mut target, &record).unwrap();
    // No fallback language.
    assert_eq!(target.description, "");
}

#[test]
fn test_enrich_fails_on_unparseable_published_date() {
    let use_case = use_case_with_score(0.0);

    // Missing the mandatory fractional seconds.
    let record = record_from_json(
        r#"{
            "id": "CVE-2024-0003",
            "published": "2024-01-15T10:30:00",
            "lastModified": "2024-01-16T10:30:00.000",
            "vendorComments": [
                {"organization": "Org", "comment": "c", "lastModified": "2024-01-16T10:30:00"}
            ]
        }"#,
    );

    let mut target = CanonicalVulnerability::default();
    let err = use_case.enrich(&mut target, &record).unwrap_err();
    assert!(matches!(
        err,
        EnrichmentError::Timestamp {
            field: "published",
            ..
        }
    ));
    // The call aborted before vendor comments were processed.
    assert!(target.vendor_comments.is_empty());
}

#[test]
fn test_enrich_fails_on_unparseable_last_modified_date() {
    let use_case = use_case_with_score(0.0);

    let record = record_from_json(
        r#"{
            "id": "CVE-2024-0004",
            "published": "2024-01-15T10:30:00.000",
            "lastModified": "not-a-date"
        }"#,
    );

    let mut target = CanonicalVulnerability::default();
    let err = use_case.enrich(&mut target, &record).unwrap_err();
    assert!(matches!(
        err,
        EnrichmentError::Timestamp {
            field: "lastModified",
            ..
        }
    ));
}

#[test]
fn test_malformed_vendor_comment_is_dropped_order_preserved() {
    let use_case = use_case_with_score(0.0);

    let record = record_from_json(
        r#"{
            "id": "CVE-2024-0005",
            "published": "2024-01-15T10:30:00.000",
            "lastModified": "2024-01-16T10:30:00.000",
            "vendorComments": [
                {"organization": "First", "comment": "ok", "lastModified": "2020-05-01T12:00:00"},
                {"organization": "Broken", "comment": "bad date", "lastModified": "May 1st 2020"},
                {"organization": "Last", "comment": "also ok", "lastModified": "2021-06-02T08:15:30"}
            ]
        }"#,
    );

    let mut target = CanonicalVulnerability::default();
    use_case.enrich(&mut target, &record).unwrap();

    let organizations: Vec<&str> = target
        .vendor_comments
        .iter()
        .map(|c| c.organization.as_str())
        .collect();
    assert_eq!(organizations, vec!["First", "Last"]);
}

#[test]
fn test_vendor_comment_with_fractional_seconds_is_rejected() {
    // The comment layout has no fractional seconds; trailing input fails.
    let comments = [RawVendorComment {
        organization: "Org".to_string(),
        comment: "c".to_string(),
        last_modified: "2020-05-01T12:00:00.123".to_string(),
    }];
    assert!(parse_vendor_comments(&comments).is_empty());
}

#[test]
fn test_empty_vendor_comments_yield_empty_list() {
    assert!(parse_vendor_comments(&[]).is_empty());
}

#[tokio::test]
async fn test_fetch_by_legacy_cpe_rejects_bad_cpe_before_fetching() {
    let source = MockVulnerabilitySource::empty();
    let calls = source.call_counter();
    let use_case = EnrichVulnerabilityUseCase::new(source, RecordingRiskModel::new(0.0));

    let err = use_case
        .fetch_by_legacy_cpe("cpe:/a:dovecot:dovecot")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EnrichmentError::Cpe(CpeError::TooShort { .. })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fetch_by_legacy_cpe_normalizes_then_fetches() {
    let source = MockVulnerabilitySource::empty();
    let calls = source.call_counter();
    let use_case = EnrichVulnerabilityUseCase::new(source, RecordingRiskModel::new(0.0));

    let response = use_case
        .fetch_by_legacy_cpe("cpe:/o:microsoft:windows_10:1607")
        .await
        .unwrap();
    assert!(response.vulnerabilities.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_fetch_by_cpe_rejects_wildcard_product() {
    let source = MockVulnerabilitySource::empty();
    let calls = source.call_counter();
    let use_case = EnrichVulnerabilityUseCase::new(source, RecordingRiskModel::new(0.0));

    let err = use_case
        .fetch_by_cpe("cpe:2.3:a:vendor:*:1.0:*:*:*:*:*:*:*")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EnrichmentError::Cpe(CpeError::WildcardComponent {
            component: "product"
        })
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
