use serde::Deserialize;

/// Response envelope of the NVD CVE API 2.0.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NvdApiResponse {
    #[serde(default)]
    pub results_per_page: u32,
    #[serde(default)]
    pub start_index: u32,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub vulnerabilities: Vec<VulnerabilityEntry>,
}

/// One entry of the envelope's `vulnerabilities` list.
#[derive(Debug, Clone, Deserialize)]
pub struct VulnerabilityEntry {
    pub cve: CveRecord,
}

/// A raw CVE record as returned by the NVD.
///
/// Read-only after deserialization; discarded once enrichment finishes.
/// Vocabulary fields stay plain strings throughout the DTOs - the metric
/// extractor owns their interpretation and maps anything unexpected to
/// `Unknown`. Fields the API may omit entirely are `Option`, never
/// sentinel strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CveRecord {
    pub id: String,
    #[serde(default)]
    pub source_identifier: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub descriptions: Vec<Description>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub vendor_comments: Vec<RawVendorComment>,
    #[serde(default)]
    pub metrics: Option<Metrics>,
}

/// A localized description; records usually carry `en` plus translations.
#[derive(Debug, Clone, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    pub url: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// A vendor comment as delivered by the API, timestamp still unparsed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVendorComment {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub last_modified: String,
}

/// Per-version CVSS metric lists; each list is independently optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(default)]
    pub cvss_metric_v31: Vec<CvssMetricV3>,
    #[serde(default)]
    pub cvss_metric_v30: Vec<CvssMetricV3>,
    #[serde(default)]
    pub cvss_metric_v2: Vec<CvssMetricV2>,
}

/// A CVSS 3.0/3.1 metric entry; both versions share one schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssMetricV3 {
    pub cvss_data: CvssDataV3,
    #[serde(default)]
    pub exploitability_score: f64,
    #[serde(default)]
    pub impact_score: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssDataV3 {
    #[serde(default)]
    pub base_score: f64,
    #[serde(default)]
    pub base_severity: String,
    #[serde(default)]
    pub attack_vector: String,
    #[serde(default)]
    pub attack_complexity: String,
    #[serde(default)]
    pub privileges_required: String,
    #[serde(default)]
    pub integrity_impact: String,
    #[serde(default)]
    pub availability_impact: String,
    /// Temporal field, absent from most records.
    #[serde(default)]
    pub exploit_code_maturity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssMetricV2 {
    pub cvss_data: CvssDataV2,
    #[serde(default)]
    pub exploitability_score: f64,
    #[serde(default)]
    pub impact_score: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvssDataV2 {
    #[serde(default)]
    pub base_score: f64,
    #[serde(default)]
    pub access_vector: String,
    #[serde(default)]
    pub access_complexity: String,
    #[serde(default)]
    pub integrity_impact: String,
    #[serde(default)]
    pub availability_impact: String,
    /// Temporal field, absent from most records.
    #[serde(default)]
    pub exploitability: Option<String>,
}
