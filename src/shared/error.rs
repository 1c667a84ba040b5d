use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while normalizing or validating CPE identifiers.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the messages close to what operators see in scanner logs.
#[derive(Debug, Error)]
pub enum CpeError {
    #[error("CPE does not start with 'cpe:/': {cpe}")]
    MissingLegacyPrefix { cpe: String },

    #[error("CPE is too short, needs at least part, vendor, product and version: {cpe}")]
    TooShort { cpe: String },

    #[error("invalid CPE name: must have 13 colon-separated parts, got {count}")]
    TokenCount { count: usize },

    #[error("invalid CPE name: must start with 'cpe', got '{found}'")]
    Scheme { found: String },

    #[error("invalid CPE name: must have '2.3' as the second part (CPE version), got '{found}'")]
    CpeVersion { found: String },

    #[error("invalid CPE name: {component} component must not be '*'")]
    WildcardComponent { component: &'static str },
}

/// Errors produced by the NVD API client.
///
/// `ServiceUnavailable` is the only retriable kind; everything else
/// aborts the fetch on the first occurrence.
#[derive(Debug, Error)]
pub enum NvdError {
    #[error("NVD API service unavailable (503)")]
    ServiceUnavailable,

    #[error("NVD API status error: {status}")]
    ApiStatus { status: StatusCode },

    #[error("failed to decode NVD API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed NVD API request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("NVD API request failed after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<NvdError>,
    },
}

impl NvdError {
    /// Whether another attempt against the API may succeed.
    pub fn is_retriable(&self) -> bool {
        matches!(self, NvdError::ServiceUnavailable)
    }
}

/// Errors surfaced by the enrichment use case.
///
/// CPE and NVD failures pass through transparently so callers can still
/// branch on the underlying kind; timestamp failures are fatal to the
/// enrichment call because published/lastModified are required fields.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error(transparent)]
    Cpe(#[from] CpeError),

    #[error(transparent)]
    Nvd(#[from] NvdError),

    #[error("failed to parse {field} timestamp '{value}'")]
    Timestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
