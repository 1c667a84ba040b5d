use crate::application::dto::NvdApiResponse;
use crate::enrichment::domain::Cpe;
use crate::shared::error::NvdError;
use async_trait::async_trait;

/// VulnerabilitySource port for looking up CVE records by CPE
///
/// This port abstracts the external vulnerability database (the NVD CVE
/// API 2.0) so use cases and tests can swap the transport.
///
/// # Async Support
/// Implementations must be `Send + Sync`; a single instance may be shared
/// across concurrent enrichment calls and must not hold call-to-call
/// mutable state.
#[async_trait]
pub trait VulnerabilitySource: Send + Sync {
    /// Fetches all CVE records matching a validated CPE name.
    ///
    /// # Errors
    /// Returns an [`NvdError`] carrying the transport failure, the
    /// non-success status, or the exhausted retry budget, so callers can
    /// branch on retriable versus terminal causes.
    async fn fetch_by_cpe(&self, cpe: &Cpe) -> Result<NvdApiResponse, NvdError>;
}
