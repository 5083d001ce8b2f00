//! OTP plan API response DTOs.
//!
//! These types map directly to the OpenTripPlanner REST `plan` response.
//! Fields OTP omits for some legs (route names, colors, alerts) are
//! `Option`s or defaulted; nothing here is validated beyond its shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker OTP puts in `missing` when the origin could not be resolved.
pub const FROM_PLACE: &str = "FROM_PLACE";

/// Marker OTP puts in `missing` when the destination could not be resolved.
pub const TO_PLACE: &str = "TO_PLACE";

/// Body of a `plan` response.
///
/// OTP answers planning failures with HTTP 200 and an `error` object
/// instead of a `plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanResponse {
    /// The trip plan, present on success.
    pub plan: Option<Plan>,

    /// Planning error, present on failure.
    pub error: Option<PlanError>,
}

impl PlanResponse {
    /// Split the response into candidate itineraries or a planning failure.
    ///
    /// # Panics
    ///
    /// Panics if the body carries neither a plan nor an error. That is an
    /// upstream contract violation, not a classifiable failure.
    pub fn into_result(self) -> Result<Vec<OtpItinerary>, OtpFailure> {
        match (self.plan, self.error) {
            (_, Some(error)) => Err(OtpFailure::Plan(error)),
            (Some(plan), None) => Ok(plan.itineraries),
            (None, None) => panic!("OTP plan response carried neither `plan` nor `error`"),
        }
    }
}

/// A trip plan: the candidate itineraries, best first.
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub itineraries: Vec<OtpItinerary>,
}

/// One candidate trip.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpItinerary {
    /// Legs in travel order.
    pub legs: Vec<OtpLeg>,

    /// Total duration in seconds.
    pub duration: i64,

    /// Departure, epoch milliseconds.
    pub start_time: i64,

    /// Arrival, epoch milliseconds.
    pub end_time: i64,

    /// Distance traveled outside transit vehicles, in meters. Covers
    /// cycling when bicycle access was requested.
    #[serde(default)]
    pub walk_distance: f64,
}

/// One leg of a candidate trip.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpLeg {
    pub mode: OtpMode,

    /// Short route name, e.g. "42" or "U2".
    pub route_short_name: Option<String>,

    /// Full route name; empty for walk and bicycle legs.
    #[serde(default)]
    pub route: String,

    /// Route color as six hex digits without a leading `#`.
    pub route_color: Option<String>,

    pub from: OtpPlace,
    pub to: OtpPlace,

    /// Epoch milliseconds.
    pub start_time: i64,

    /// Epoch milliseconds.
    pub end_time: i64,

    #[serde(default)]
    pub transit_leg: bool,

    /// Whether the times come from real-time data.
    #[serde(default)]
    pub real_time: bool,

    pub leg_geometry: EncodedPolyline,

    pub alerts: Option<Vec<OtpAlert>>,
}

/// A named point where a leg starts or ends.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OtpPlace {
    #[serde(default)]
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

/// Encoded leg geometry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EncodedPolyline {
    pub points: String,

    /// Number of encoded points, when OTP reports it.
    pub length: Option<u32>,
}

/// A service disruption notice attached to a leg.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpAlert {
    #[serde(default)]
    pub alert_header_text: String,

    #[serde(default)]
    pub alert_description_text: String,
}

/// OTP travel mode.
///
/// Modes this crate does not know about deserialize into
/// [`OtpMode::Other`], carrying the raw name, rather than failing the
/// whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum OtpMode {
    Walk,
    Bicycle,
    Car,
    Bus,
    Rail,
    Train,
    Subway,
    Tram,
    CableCar,
    Funicular,
    Gondola,
    Ferry,
    Transit,
    Other(String),
}

impl OtpMode {
    /// The wire name OTP uses for this mode.
    pub fn as_str(&self) -> &str {
        match self {
            OtpMode::Walk => "WALK",
            OtpMode::Bicycle => "BICYCLE",
            OtpMode::Car => "CAR",
            OtpMode::Bus => "BUS",
            OtpMode::Rail => "RAIL",
            OtpMode::Train => "TRAIN",
            OtpMode::Subway => "SUBWAY",
            OtpMode::Tram => "TRAM",
            OtpMode::CableCar => "CABLE_CAR",
            OtpMode::Funicular => "FUNICULAR",
            OtpMode::Gondola => "GONDOLA",
            OtpMode::Ferry => "FERRY",
            OtpMode::Transit => "TRANSIT",
            OtpMode::Other(name) => name,
        }
    }

    /// Returns true for modes drawn as a footpath (walking and cycling).
    pub fn is_foot_or_bicycle(&self) -> bool {
        matches!(self, OtpMode::Walk | OtpMode::Bicycle)
    }
}

impl From<String> for OtpMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "WALK" => OtpMode::Walk,
            "BICYCLE" => OtpMode::Bicycle,
            "CAR" => OtpMode::Car,
            "BUS" => OtpMode::Bus,
            "RAIL" => OtpMode::Rail,
            "TRAIN" => OtpMode::Train,
            "SUBWAY" => OtpMode::Subway,
            "TRAM" => OtpMode::Tram,
            "CABLE_CAR" => OtpMode::CableCar,
            "FUNICULAR" => OtpMode::Funicular,
            "GONDOLA" => OtpMode::Gondola,
            "FERRY" => OtpMode::Ferry,
            "TRANSIT" => OtpMode::Transit,
            _ => OtpMode::Other(s),
        }
    }
}

impl From<OtpMode> for String {
    fn from(mode: OtpMode) -> Self {
        match mode {
            OtpMode::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OtpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed plan request, in one of exactly two shapes.
///
/// Serialized externally tagged, so the raw payloads are
/// `{"planError": {...}}` and `{"responseError": {"status": 404}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum OtpFailure {
    /// OTP understood the request but could not plan it.
    #[serde(rename = "planError")]
    Plan(PlanError),

    /// The request itself failed at the HTTP level.
    #[serde(rename = "responseError")]
    Response(ResponseError),
}

impl OtpFailure {
    /// Decode a raw failure payload.
    ///
    /// # Panics
    ///
    /// Panics if `value` matches neither failure shape.
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(failure) => failure,
            Err(e) => panic!("unrecognized OTP failure payload: {e}"),
        }
    }
}

/// Planning error returned in the body of a `plan` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanError {
    pub id: PlanErrorId,

    /// Which endpoints could not be resolved (`FROM_PLACE`, `TO_PLACE`).
    #[serde(default)]
    pub missing: Vec<String>,

    /// Human-readable description.
    #[serde(default)]
    pub msg: String,

    /// Symbolic error name, e.g. `"OUTSIDE_BOUNDS"`.
    #[serde(default)]
    pub message: String,
}

impl PlanError {
    /// Returns true if the destination marker is among the missing places.
    pub fn is_missing_destination(&self) -> bool {
        self.missing.iter().any(|m| m == TO_PLACE)
    }

    /// Returns true if the origin marker is among the missing places.
    pub fn is_missing_origin(&self) -> bool {
        self.missing.iter().any(|m| m == FROM_PLACE)
    }
}

/// Numeric OTP planning error id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "u16")]
pub enum PlanErrorId {
    /// 400: origin or destination outside the graph's coverage.
    OutsideBounds,
    /// 404: no trip found.
    PathNotFound,
    /// 406: no transit service on the requested date.
    NoTransitTimes,
    /// 408: planning timed out.
    RequestTimeout,
    /// 409: origin and destination are too close together.
    TooClose,
    /// 413: a request parameter was invalid.
    BogusParameter,
    /// 470: an endpoint is not reachable from the street network.
    LocationNotAccessible,
    /// 500: internal OTP error.
    SystemError,
    /// 503: the routing graph is not loaded.
    GraphUnavailable,
    Other(u16),
}

impl From<u16> for PlanErrorId {
    fn from(id: u16) -> Self {
        match id {
            400 => PlanErrorId::OutsideBounds,
            404 => PlanErrorId::PathNotFound,
            406 => PlanErrorId::NoTransitTimes,
            408 => PlanErrorId::RequestTimeout,
            409 => PlanErrorId::TooClose,
            413 => PlanErrorId::BogusParameter,
            470 => PlanErrorId::LocationNotAccessible,
            500 => PlanErrorId::SystemError,
            503 => PlanErrorId::GraphUnavailable,
            other => PlanErrorId::Other(other),
        }
    }
}

/// HTTP-level failure of a plan request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResponseError {
    /// HTTP status, or 0 when no response was received.
    pub status: u16,
}
