//! Plan requests and the provider seam.

use std::future::Future;

use crate::geometry::LngLat;

use super::types::{OtpFailure, OtpItinerary, OtpMode};

/// Parameters of one OTP `plan` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub from: LngLat,
    pub to: LngLat,

    /// Maximum number of candidate itineraries to return.
    pub num_itineraries: u8,

    /// Modes OTP may use, e.g. `[Transit, Bicycle]`.
    pub modes: Vec<OtpMode>,

    /// Departure (or arrival, with `arrive_by`) time, as OTP accepts it
    /// (e.g. `"1:02pm"` or `"13:02"`).
    pub time: Option<String>,

    /// Date in `MM-DD-YYYY` or `YYYY-MM-DD` form.
    pub date: Option<String>,

    /// Interpret `time` as the latest arrival rather than departure.
    pub arrive_by: Option<bool>,
}

/// Query string key/value pairs, in a stable order.
pub type QueryPairs = Vec<(&'static str, String)>;

impl PlanRequest {
    /// Build the query string parameters for OTP's REST `plan` endpoint.
    ///
    /// OTP expects places as `lat,lon`, the reverse of our `LngLat` order.
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            ("fromPlace", format!("{},{}", self.from.y, self.from.x)),
            ("toPlace", format!("{},{}", self.to.y, self.to.x)),
            ("numItineraries", self.num_itineraries.to_string()),
            (
                "mode",
                self.modes
                    .iter()
                    .map(OtpMode::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        ];

        if let Some(time) = &self.time {
            pairs.push(("time", time.clone()));
        }
        if let Some(date) = &self.date {
            pairs.push(("date", date.clone()));
        }
        if let Some(arrive_by) = self.arrive_by {
            pairs.push(("arriveBy", arrive_by.to_string()));
        }

        pairs
    }
}

/// Source of OTP plan results.
///
/// Implemented by the HTTP client, the caching wrapper, and the in-memory
/// mock, so itinerary fetching can be tested without a live OTP server.
pub trait PlanProvider: Send + Sync {
    /// Fetch candidate itineraries for `request`, best first.
    ///
    /// Every failure, including transport problems, comes back as one of
    /// the two [`OtpFailure`] shapes.
    fn fetch_itineraries(
        &self,
        request: &PlanRequest,
    ) -> impl Future<Output = Result<Vec<OtpItinerary>, OtpFailure>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;

    fn request() -> PlanRequest {
        PlanRequest {
            from: Coord { x: -122.3, y: 47.6 },
            to: Coord { x: -122.2, y: 47.5 },
            num_itineraries: 5,
            modes: vec![OtpMode::Transit, OtpMode::Bicycle],
            time: None,
            date: None,
            arrive_by: None,
        }
    }

    #[test]
    fn minimal_query() {
        let pairs = request().query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("fromPlace", "47.6,-122.3".to_string()),
                ("toPlace", "47.5,-122.2".to_string()),
                ("numItineraries", "5".to_string()),
                ("mode", "TRANSIT,BICYCLE".to_string()),
            ]
        );
    }

    #[test]
    fn optional_parameters() {
        let mut req = request();
        req.time = Some("8:30am".into());
        req.date = Some("2024-03-15".into());
        req.arrive_by = Some(true);

        let pairs = req.query_pairs();

        assert!(pairs.contains(&("time", "8:30am".to_string())));
        assert!(pairs.contains(&("date", "2024-03-15".to_string())));
        assert!(pairs.contains(&("arriveBy", "true".to_string())));
    }
}
