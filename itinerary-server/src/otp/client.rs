//! OTP plan API HTTP client.
//!
//! Issues `GET {base}/otp/routers/{router}/plan` requests and turns every
//! outcome into either candidate itineraries or one of the two
//! [`OtpFailure`] shapes.

use tracing::{debug, warn};

use super::error::OtpClientError;
use super::request::{PlanProvider, PlanRequest};
use super::types::{OtpFailure, OtpItinerary, PlanResponse, ResponseError};

/// Default base URL for a locally running OTP instance.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default OTP router id.
const DEFAULT_ROUTER: &str = "default";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Status reported when no HTTP response was received at all.
const NO_RESPONSE_STATUS: u16 = 0;

/// Configuration for the OTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpConfig {
    /// Base URL of the OTP server
    pub base_url: String,
    /// Router id (OTP 1.x supports several graphs per server)
    pub router: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OtpConfig {
    /// Create a new config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            router: DEFAULT_ROUTER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Use a router other than `default`.
    pub fn with_router(mut self, router: impl Into<String>) -> Self {
        self.router = router.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Full URL of the plan endpoint.
    pub fn plan_url(&self) -> String {
        format!(
            "{}/otp/routers/{}/plan",
            self.base_url.trim_end_matches('/'),
            self.router
        )
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// OTP plan API client.
#[derive(Debug, Clone)]
pub struct OtpClient {
    http: reqwest::Client,
    plan_url: String,
}

impl OtpClient {
    /// Create a new OTP client with the given configuration.
    pub fn new(config: OtpConfig) -> Result<Self, OtpClientError> {
        if config.base_url.trim().is_empty() {
            return Err(OtpClientError::InvalidConfig(
                "base URL must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            plan_url: config.plan_url(),
        })
    }

    /// Run a plan request against OTP.
    ///
    /// Network errors and undecodable bodies are reported as a response
    /// failure (status 0 when no HTTP status is available). Non-2xx statuses
    /// become a response failure with that status. A decoded body is split
    /// into itineraries or a planning error.
    pub async fn plan(&self, request: &PlanRequest) -> Result<Vec<OtpItinerary>, OtpFailure> {
        debug!(url = %self.plan_url, modes = ?request.modes, "requesting OTP plan");

        let response = self
            .http
            .get(&self.plan_url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| transport_failure(&e))?;

        let status = response.status();

        if !status.is_success() {
            warn!(status = status.as_u16(), "OTP plan request failed");
            return Err(OtpFailure::Response(ResponseError {
                status: status.as_u16(),
            }));
        }

        let body = response.text().await.map_err(|e| transport_failure(&e))?;

        let plan: PlanResponse = serde_json::from_str(&body).map_err(|e| {
            let snippet: String = body.chars().take(500).collect();
            warn!(error = %e, body = %snippet, "undecodable OTP plan response");
            OtpFailure::Response(ResponseError {
                status: NO_RESPONSE_STATUS,
            })
        })?;

        plan.into_result()
    }
}

impl PlanProvider for OtpClient {
    async fn fetch_itineraries(
        &self,
        request: &PlanRequest,
    ) -> Result<Vec<OtpItinerary>, OtpFailure> {
        self.plan(request).await
    }
}

/// Map a reqwest error to a response failure, keeping its status if any.
fn transport_failure(err: &reqwest::Error) -> OtpFailure {
    warn!(error = %err, "OTP transport error");
    OtpFailure::Response(ResponseError {
        status: err
            .status()
            .map_or(NO_RESPONSE_STATUS, |status| status.as_u16()),
    })
}
