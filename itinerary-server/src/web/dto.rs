//! Data transfer objects for web requests and responses.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::format::{DurationFormat, format_duration, format_time};
use crate::geometry::{Bounds, LngLat};
use crate::i18n::Localizer;
use crate::itinerary::{
    Itinerary, ItineraryError, ItineraryLeg, LegAlert, LinePaint, TravelMode, Trip,
};

/// Query for `GET /v1/itineraries`.
#[derive(Debug, Deserialize)]
pub struct ItinerariesQuery {
    pub from_lng: f64,
    pub from_lat: f64,
    pub to_lng: f64,
    pub to_lat: f64,

    /// Distance units for display, `km` (default) or `mi`
    pub units: Option<String>,

    /// Departure time as OTP accepts it, e.g. "8:30am"
    pub time: Option<String>,

    /// Departure date, e.g. "2024-03-15"
    pub date: Option<String>,

    /// Treat `time` as the latest arrival time
    pub arrive_by: Option<bool>,

    /// Allow bicycle legs
    pub with_bicycle: Option<bool>,
}

/// Response for `GET /v1/itineraries`.
#[derive(Debug, Serialize)]
pub struct ItinerariesResponse {
    pub itineraries: Vec<ItineraryResult>,
}

/// An itinerary ready for display.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub mode: TravelMode,

    /// Total duration in seconds
    pub duration_secs: f64,

    /// Localized short duration, e.g. "25 min"
    pub duration: String,

    /// Localized departure and arrival, e.g. "9:00 AM - 9:25 AM"
    pub time_range: String,

    /// Leg labels joined by arrows
    pub via_route: String,

    /// Localized walking or biking distance, e.g. "1.2 km walk"
    pub foot_distance: String,

    /// Covering rectangle of all leg geometry
    pub bounds: Option<BoundsResult>,

    /// Index into `legs` of the first transit leg
    pub first_transit_leg: Option<usize>,

    pub has_alerts: bool,
    pub legs: Vec<LegResult>,
}

impl ItineraryResult {
    pub fn from_itinerary(
        itinerary: &Itinerary,
        localizer: &dyn Localizer,
        offset: &FixedOffset,
    ) -> Self {
        let first_transit_leg = itinerary.first_transit_leg().and_then(|first| {
            itinerary
                .legs()
                .iter()
                .position(|leg| std::ptr::eq(leg, first))
        });

        Self {
            mode: itinerary.mode(),
            duration_secs: itinerary.duration(),
            duration: itinerary.duration_formatted(localizer),
            time_range: itinerary.start_stop_times_formatted(localizer, offset),
            via_route: itinerary.via_route_formatted(),
            foot_distance: itinerary.formatted_foot_distance(localizer),
            bounds: BoundsResult::from_bounds(&itinerary.bounds()),
            first_transit_leg,
            has_alerts: itinerary.has_alerts(),
            legs: itinerary
                .legs()
                .iter()
                .map(|leg| LegResult::from_leg(leg, localizer, offset))
                .collect(),
        }
    }
}

/// One leg of an itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Icon plus route name, e.g. "🚍 42"
    pub label: String,
    pub emoji: String,

    /// Raw OTP mode, e.g. "BUS"
    pub mode: String,

    pub from: PlaceResult,
    pub to: PlaceResult,

    /// Epoch milliseconds
    pub start_time: i64,
    pub end_time: i64,

    /// Localized departure time, e.g. "9:05 AM"
    pub departure: String,

    pub duration_secs: f64,

    /// Localized short duration, e.g. "10 min"
    pub duration: String,

    pub transit_leg: bool,
    pub real_time: bool,

    /// Paint when the itinerary is selected
    pub active_paint: LinePaint,

    /// Paint when another itinerary is selected
    pub inactive_paint: LinePaint,

    /// Decoded path as `[lng, lat]` pairs
    pub geometry: Vec<[f64; 2]>,

    pub alerts: Vec<AlertResult>,
}

impl LegResult {
    pub fn from_leg(leg: &ItineraryLeg, localizer: &dyn Localizer, offset: &FixedOffset) -> Self {
        Self {
            label: leg.short_name(),
            emoji: leg.emoji().to_string(),
            mode: leg.mode().to_string(),
            from: PlaceResult::new(leg.source_name(), leg.source_lng_lat()),
            to: PlaceResult::new(leg.destination_name(), leg.destination_lng_lat()),
            start_time: leg.start_time(),
            end_time: leg.end_time(),
            departure: format_time(leg.start_time(), offset),
            duration_secs: leg.duration(),
            duration: format_duration(leg.duration(), DurationFormat::Shortform, localizer),
            transit_leg: leg.transit_leg(),
            real_time: leg.real_time(),
            active_paint: leg.paint_style(true).paint(),
            inactive_paint: leg.paint_style(false).paint(),
            geometry: leg.coordinates().iter().map(|c| [c.x, c.y]).collect(),
            alerts: leg.alerts().iter().map(AlertResult::from_alert).collect(),
        }
    }
}

/// A named place.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub name: String,
    pub lng: f64,
    pub lat: f64,
}

impl PlaceResult {
    fn new(name: &str, coord: LngLat) -> Self {
        Self {
            name: name.to_string(),
            lng: coord.x,
            lat: coord.y,
        }
    }
}

/// A service alert.
#[derive(Debug, Serialize)]
pub struct AlertResult {
    pub header: String,
    pub description: String,
}

impl AlertResult {
    pub fn from_alert(alert: &LegAlert<'_>) -> Self {
        Self {
            header: alert.header_text().to_string(),
            description: alert.description_text().to_string(),
        }
    }
}

/// Bounding rectangle as `[lng, lat]` corners.
#[derive(Debug, Serialize)]
pub struct BoundsResult {
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
}

impl BoundsResult {
    /// `None` for an empty bound.
    pub fn from_bounds(bounds: &Bounds) -> Option<Self> {
        let sw = bounds.south_west()?;
        let ne = bounds.north_east()?;
        Some(Self {
            south_west: [sw.x, sw.y],
            north_east: [ne.x, ne.y],
        })
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable kind, e.g. "destination_outside_bounds"
    pub kind: String,

    /// Diagnostic detail, not meant for end users
    pub message: Option<String>,

    /// Localized explanation for end users
    pub user_message: String,
}

impl ErrorBody {
    pub fn from_itinerary_error(error: &ItineraryError, localizer: &dyn Localizer) -> Self {
        Self {
            kind: error.kind().as_str().to_string(),
            message: error.message().map(str::to_string),
            user_message: error.localized_message(localizer),
        }
    }
}
