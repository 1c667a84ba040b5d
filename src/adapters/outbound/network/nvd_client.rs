use crate::application::dto::NvdApiResponse;
use crate::enrichment::domain::Cpe;
use crate::ports::outbound::VulnerabilitySource;
use crate::shared::error::NvdError;
use async_trait::async_trait;
use rand::Rng;
use reqwest::StatusCode;
use std::time::Duration;

/// Public NVD CVE API 2.0 endpoint.
const DEFAULT_API_URL: &str = "https://services.nvd.nist.gov/rest/json/cves/2.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_RETRIES: u32 = 3;
const INITIAL_RETRY_DELAY: Duration = Duration::from_secs(5);
const MAX_RETRY_DELAY: Duration = Duration::from_secs(15);

/// Jitter applied to each computed delay, as a fraction of the delay.
const JITTER_FRACTION: f64 = 0.2;

/// NvdClient adapter for the NVD CVE API 2.0
///
/// Implements the VulnerabilitySource port with a retrying HTTP fetch.
/// The NVD rate-limits aggressively and answers 503 while shedding load,
/// so a 503 is retried with exponential backoff and jitter; every other
/// failure aborts on first occurrence.
///
/// One client may be shared across concurrent enrichment calls; the only
/// state reused between fetches is reqwest's connection pool.
pub struct NvdClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
    initial_retry_delay: Duration,
}

impl NvdClient {
    /// Creates a client against the public NVD endpoint.
    pub fn new() -> Result<Self, NvdError> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates a client against an alternative endpoint (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, NvdError> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nvd-enrich/{}", version);
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            max_retries: MAX_RETRIES,
            initial_retry_delay: INITIAL_RETRY_DELAY,
        })
    }

    /// Overrides the retry pacing without touching outcome classification.
    ///
    /// `max_retries` counts retries after the first attempt, so the total
    /// number of attempts is `max_retries + 1`. Tests use this to run the
    /// full retry ladder with millisecond delays.
    pub fn with_retry_policy(mut self, max_retries: u32, initial_retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.initial_retry_delay = initial_retry_delay;
        self
    }

    /// One request/decode cycle with its outcome classified.
    async fn attempt_fetch(&self, url: &str) -> Result<NvdApiResponse, NvdError> {
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            StatusCode::SERVICE_UNAVAILABLE => Err(NvdError::ServiceUnavailable),
            status => Err(NvdError::ApiStatus { status }),
        }
    }

    /// Exponential backoff with jitter: `initial * 2^attempt`, plus or
    /// minus up to 20% of that value, capped at [`MAX_RETRY_DELAY`].
    fn retry_delay(&self, attempt: u32) -> Duration {
        let nominal = self.initial_retry_delay.as_secs_f64() * 2f64.powi(attempt as i32);
        let jitter = nominal * rand::rng().random_range(-JITTER_FRACTION..=JITTER_FRACTION);
        Duration::from_secs_f64((nominal + jitter).min(MAX_RETRY_DELAY.as_secs_f64()))
    }
}

#[async_trait]
impl VulnerabilitySource for NvdClient {
    async fn fetch_by_cpe(&self, cpe: &Cpe) -> Result<NvdApiResponse, NvdError> {
        let url = format!(
            "{}?cpeName={}",
            self.base_url,
            urlencoding::encode(cpe.as_str())
        );

        let mut attempt = 0;
        loop {
            tracing::debug!(cpe = cpe.as_str(), attempt, "querying NVD");

            match self.attempt_fetch(&url).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_retriable() && attempt < self.max_retries => {
                    let delay = self.retry_delay(attempt);
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        cpe = cpe.as_str(),
                        "NVD API request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) if err.is_retriable() => {
                    tracing::error!(
                        max_retries = self.max_retries,
                        cpe = cpe.as_str(),
                        error = %err,
                        "NVD API request failed after max retries"
                    );
                    return Err(NvdError::RetriesExhausted {
                        attempts: attempt + 1,
                        source: Box::new(err),
                    });
                }
                Err(err) => return Err(err),
            }
        }
    }
}

// Note: no Default implementation; client construction can fail and the
// caller must handle the Result from new() explicitly.
