//! Fetching and classifying transit itineraries.

use tracing::debug;

use crate::geometry::LngLat;
use crate::otp::{OtpMode, PlanProvider, PlanRequest};

use super::error::ItineraryError;
use super::model::Itinerary;
use super::trip::DistanceUnits;

/// Number of candidate itineraries requested from OTP.
pub const MAX_ITINERARIES: u8 = 5;

/// What the traveler asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub from: LngLat,
    pub to: LngLat,
    pub distance_units: DistanceUnits,
    pub departure_time: Option<String>,
    pub departure_date: Option<String>,
    pub arrive_by: Option<bool>,
    /// Allow bicycle legs in addition to transit.
    pub with_bicycle: bool,
}

impl FetchRequest {
    pub fn new(from: LngLat, to: LngLat) -> Self {
        Self {
            from,
            to,
            distance_units: DistanceUnits::default(),
            departure_time: None,
            departure_date: None,
            arrive_by: None,
            with_bicycle: false,
        }
    }

    pub fn with_distance_units(mut self, units: DistanceUnits) -> Self {
        self.distance_units = units;
        self
    }

    pub fn with_bicycle(mut self, with_bicycle: bool) -> Self {
        self.with_bicycle = with_bicycle;
        self
    }

    /// The OTP call this request maps to.
    pub fn plan_request(&self) -> PlanRequest {
        let mut modes = vec![OtpMode::Transit];
        if self.with_bicycle {
            modes.push(OtpMode::Bicycle);
        }

        PlanRequest {
            from: self.from,
            to: self.to,
            num_itineraries: MAX_ITINERARIES,
            modes,
            time: self.departure_time.clone(),
            date: self.departure_date.clone(),
            arrive_by: self.arrive_by,
        }
    }
}

impl Itinerary {
    /// Fetch the best transit itineraries for `request`.
    ///
    /// Candidates keep OTP's ranking. Any failure is classified into a
    /// single [`ItineraryError`]; there is no partial success.
    pub async fn fetch_best<P: PlanProvider>(
        provider: &P,
        request: &FetchRequest,
    ) -> Result<Vec<Itinerary>, ItineraryError> {
        let plan_request = request.plan_request();
        debug!(
            from = ?request.from,
            to = ?request.to,
            with_bicycle = request.with_bicycle,
            "fetching itineraries"
        );

        match provider.fetch_itineraries(&plan_request).await {
            Ok(raw) => {
                debug!(count = raw.len(), "received itineraries");
                let units = request.distance_units;
                let with_bicycle = request.with_bicycle;
                Ok(raw
                    .into_iter()
                    .map(|it| Itinerary::from_otp(it, units, with_bicycle))
                    .collect())
            }
            Err(failure) => {
                let err = ItineraryError::from_otp(&failure);
                debug!(kind = ?err.kind(), "itinerary fetch failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::ItineraryErrorKind;
    use crate::itinerary::test_support::{bus, itinerary, walk_bus_walk};
    use crate::otp::{MockPlanProvider, OtpFailure, ResponseError};

    fn request() -> FetchRequest {
        FetchRequest::new((-122.33, 47.60).into(), (-122.30, 47.65).into())
    }

    #[tokio::test]
    async fn requests_transit_only_by_default() {
        let provider = MockPlanProvider::succeeding(Vec::new());
        Itinerary::fetch_best(&provider, &request()).await.unwrap();

        let sent = provider.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].modes, vec![OtpMode::Transit]);
        assert_eq!(sent[0].num_itineraries, MAX_ITINERARIES);
        assert_eq!(sent[0].from, request().from);
        assert_eq!(sent[0].to, request().to);
    }

    #[tokio::test]
    async fn bicycle_adds_mode() {
        let provider = MockPlanProvider::succeeding(Vec::new());
        let req = request().with_bicycle(true);
        Itinerary::fetch_best(&provider, &req).await.unwrap();

        assert_eq!(
            provider.requests()[0].modes,
            vec![OtpMode::Transit, OtpMode::Bicycle]
        );
    }

    #[tokio::test]
    async fn passes_time_options() {
        let provider = MockPlanProvider::succeeding(Vec::new());
        let req = FetchRequest {
            departure_time: Some("8:30am".into()),
            departure_date: Some("2024-03-15".into()),
            arrive_by: Some(true),
            ..request()
        };
        Itinerary::fetch_best(&provider, &req).await.unwrap();

        let sent = &provider.requests()[0];
        assert_eq!(sent.time.as_deref(), Some("8:30am"));
        assert_eq!(sent.date.as_deref(), Some("2024-03-15"));
        assert_eq!(sent.arrive_by, Some(true));
    }

    #[tokio::test]
    async fn preserves_upstream_order() {
        let path = [(0.0, 0.0), (0.1, 0.1)];
        let candidates: Vec<_> = ["3", "1", "2"]
            .iter()
            .map(|name| itinerary(vec![bus(name, 0, 600, &path)], 0.0))
            .collect();
        let provider = MockPlanProvider::succeeding(candidates);

        let found = Itinerary::fetch_best(&provider, &request()).await.unwrap();

        let names: Vec<String> = found.iter().map(|it| it.via_route_formatted()).collect();
        assert_eq!(names, vec!["🚍 3", "🚍 1", "🚍 2"]);
    }

    #[tokio::test]
    async fn itineraries_carry_display_options() {
        let provider = MockPlanProvider::succeeding(vec![walk_bus_walk()]);
        let req = request()
            .with_distance_units(DistanceUnits::Miles)
            .with_bicycle(true);

        let found = Itinerary::fetch_best(&provider, &req).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].distance_units(), DistanceUnits::Miles);
        assert!(found[0].with_bicycle());
    }

    #[tokio::test]
    async fn destination_outside_bounds() {
        let body = r#"{
            "error": {
                "id": 400,
                "missing": ["TO_PLACE"],
                "msg": "Trip is not possible. You might be trying to plan a trip outside the map data boundary.",
                "message": "OUTSIDE_BOUNDS"
            }
        }"#;
        let provider = MockPlanProvider::from_plan_json(body).unwrap();

        let result = Itinerary::fetch_best(&provider, &request()).await;
        let err = result.unwrap_err();

        assert_eq!(err.kind(), ItineraryErrorKind::DestinationOutsideBounds);
        assert!(err.message().unwrap().starts_with("Trip is not possible"));
    }

    #[tokio::test]
    async fn transit_disabled() {
        let provider =
            MockPlanProvider::failing(OtpFailure::Response(ResponseError { status: 404 }));

        let result = Itinerary::fetch_best(&provider, &request()).await;
        let err = result.unwrap_err();

        assert_eq!(err.kind(), ItineraryErrorKind::TransitServiceDisabled);
        assert_eq!(err.message(), None);
        assert_eq!(provider.call_count(), 1);
    }
}
