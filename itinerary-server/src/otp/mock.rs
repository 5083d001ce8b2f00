//! In-memory plan provider for testing without an OTP server.
//!
//! Serves one canned outcome for every request and records the requests it
//! saw, so callers can assert on what would have been sent upstream.

use std::sync::{Arc, Mutex};

use super::request::{PlanProvider, PlanRequest};
use super::types::{OtpFailure, OtpItinerary, PlanResponse};

/// Plan provider that answers every request with the same outcome.
#[derive(Debug, Clone)]
pub struct MockPlanProvider {
    outcome: Result<Vec<OtpItinerary>, OtpFailure>,
    requests: Arc<Mutex<Vec<PlanRequest>>>,
}

impl MockPlanProvider {
    /// Always succeed with `itineraries`.
    pub fn succeeding(itineraries: Vec<OtpItinerary>) -> Self {
        Self::with_outcome(Ok(itineraries))
    }

    /// Always fail with `failure`.
    pub fn failing(failure: OtpFailure) -> Self {
        Self::with_outcome(Err(failure))
    }

    /// Serve the outcome encoded in a raw OTP `plan` response body.
    pub fn from_plan_json(body: &str) -> Result<Self, serde_json::Error> {
        let response: PlanResponse = serde_json::from_str(body)?;
        Ok(Self::with_outcome(response.into_result()))
    }

    fn with_outcome(outcome: Result<Vec<OtpItinerary>, OtpFailure>) -> Self {
        Self {
            outcome,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<PlanRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

impl PlanProvider for MockPlanProvider {
    async fn fetch_itineraries(
        &self,
        request: &PlanRequest,
    ) -> Result<Vec<OtpItinerary>, OtpFailure> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::otp::{OtpMode, ResponseError};
    use geo::Coord;

    fn request() -> PlanRequest {
        PlanRequest {
            from: Coord { x: 0.0, y: 0.0 },
            to: Coord { x: 1.0, y: 1.0 },
            num_itineraries: 5,
            modes: vec![OtpMode::Transit],
            time: None,
            date: None,
            arrive_by: None,
        }
    }

    #[tokio::test]
    async fn records_requests() {
        let mock = MockPlanProvider::succeeding(Vec::new());

        mock.fetch_itineraries(&request()).await.unwrap();
        mock.fetch_itineraries(&request()).await.unwrap();

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.requests()[0], request());
    }

    #[tokio::test]
    async fn serves_failure() {
        let failure = OtpFailure::Response(ResponseError { status: 503 });
        let mock = MockPlanProvider::failing(failure.clone());

        assert_eq!(mock.fetch_itineraries(&request()).await, Err(failure));
    }

    #[tokio::test]
    async fn parses_plan_json() {
        let mock = MockPlanProvider::from_plan_json(r#"{"plan": {"itineraries": []}}"#).unwrap();

        assert!(mock.fetch_itineraries(&request()).await.unwrap().is_empty());
    }
}
