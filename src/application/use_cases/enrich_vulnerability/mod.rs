use crate::application::dto::{CveRecord, Description, NvdApiResponse, RawVendorComment};
use crate::application::metrics;
use crate::enrichment::domain::{CanonicalVulnerability, Cpe, VendorComment};
use crate::enrichment::policies::derive_likelihood;
use crate::ports::outbound::{RiskModel, VulnerabilitySource};
use crate::shared::error::EnrichmentError;
use chrono::NaiveDateTime;

/// Timestamp layout of the record-level published/lastModified fields.
/// Three fractional digits are mandatory.
const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3f";

/// Timestamp layout of vendor comments; no fractional seconds.
const COMMENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// EnrichVulnerabilityUseCase - atomic enrichment of one scanner finding
///
/// Composes CPE normalization/validation, the resilient NVD fetch, CVSS
/// reconciliation and likelihood/risk derivation into the two operations
/// hosts call: fetching the raw CVE records for a CPE, and enriching one
/// caller-owned record in place. A response may match several CVEs; the
/// host supplies one target per record.
///
/// # Type Parameters
/// * `S` - VulnerabilitySource implementation
/// * `R` - RiskModel implementation
pub struct EnrichVulnerabilityUseCase<S, R> {
    source: S,
    risk_model: R,
}

impl<S, R> EnrichVulnerabilityUseCase<S, R>
where
    S: VulnerabilitySource,
    R: RiskModel,
{
    /// Creates a new use case with injected collaborators.
    pub fn new(source: S, risk_model: R) -> Self {
        Self { source, risk_model }
    }

    /// Normalizes a legacy scanner CPE, validates the result and fetches
    /// all matching CVE records.
    pub async fn fetch_by_legacy_cpe(&self, cpe: &str) -> Result<NvdApiResponse, EnrichmentError> {
        let cpe = Cpe::from_legacy(cpe)?;
        Ok(self.source.fetch_by_cpe(&cpe).await?)
    }

    /// Validates a strict CPE 2.3 string and fetches all matching CVE
    /// records.
    pub async fn fetch_by_cpe(&self, cpe: &str) -> Result<NvdApiResponse, EnrichmentError> {
        let cpe = Cpe::parse(cpe)?;
        Ok(self.source.fetch_by_cpe(&cpe).await?)
    }

    /// Enriches one caller-owned vulnerability record from one raw CVE
    /// record, mutating the target in place.
    ///
    /// Metric-derived fields keep their `Unknown` defaults when the
    /// record carries no usable metrics. The published and lastModified
    /// timestamps are required: a parse failure aborts the call before
    /// vendor comments are processed. Vendor comments with unparseable
    /// timestamps are dropped with a warning instead of failing the call.
    pub fn enrich(
        &self,
        target: &mut CanonicalVulnerability,
        record: &CveRecord,
    ) -> Result<(), EnrichmentError> {
        target.id = record.id.clone();
        target.source_identifier = record.source_identifier.clone();
        target.description = english_description(&record.descriptions);
        target.references = record.references.iter().map(|r| r.url.clone()).collect();

        let canonical = metrics::extract(record.metrics.as_ref());
        target.base_score = canonical.base_score;
        target.base_severity = canonical.base_severity;
        target.impact_score = canonical.impact_score;
        target.access = canonical.access;
        target.complexity = canonical.complexity;
        target.privileges_required = canonical.privileges_required;
        target.integrity_impact = canonical.integrity_impact;
        target.availability_impact = canonical.availability_impact;
        target.exploit = canonical.exploit;

        target.published = Some(parse_record_timestamp("published", &record.published)?);
        target.last_updated = Some(parse_record_timestamp(
            "lastModified",
            &record.last_modified,
        )?);

        target.likelihood = derive_likelihood(target.access, target.complexity);
        target.risk_score = self.risk_model.score(
            target.likelihood,
            target.integrity_impact,
            target.availability_impact,
        );

        target.vendor_comments = parse_vendor_comments(&record.vendor_comments);

        Ok(())
    }
}

/// First English description (language tag `en`); empty string when the
/// record has none. No fallback language is attempted.
fn english_description(descriptions: &[Description]) -> String {
    descriptions
        .iter()
        .find(|desc| desc.lang == "en")
        .map(|desc| desc.value.clone())
        .unwrap_or_default()
}

fn parse_record_timestamp(
    field: &'static str,
    value: &str,
) -> Result<NaiveDateTime, EnrichmentError> {
    NaiveDateTime::parse_from_str(value, RECORD_TIMESTAMP_FORMAT).map_err(|source| {
        EnrichmentError::Timestamp {
            field,
            value: value.to_string(),
            source,
        }
    })
}

/// Best-effort conversion of vendor comments.
///
/// Entries whose timestamp does not match the comment layout are skipped
/// with a warning; the relative order of surviving entries is preserved.
fn parse_vendor_comments(comments: &[RawVendorComment]) -> Vec<VendorComment> {
    let mut converted = Vec::with_capacity(comments.len());
    for comment in comments {
        match NaiveDateTime::parse_from_str(&comment.last_modified, COMMENT_TIMESTAMP_FORMAT) {
            Ok(last_modified) => converted.push(VendorComment {
                organization: comment.organization.clone(),
                comment: comment.comment.clone(),
                last_modified,
            }),
            Err(_) => {
                tracing::warn!(
                    organization = %comment.organization,
                    comment = %comment.comment,
                    "failed to parse lastModified for vendor comment, skipping"
                );
            }
        }
    }
    converted
}

#[cfg(test)]
mod tests;
