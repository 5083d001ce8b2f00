//! Itinerary leg type.
//!
//! An `ItineraryLeg` is a read-only view over one raw OTP leg. Everything a
//! trip list or map needs (icon, label, paint style, geometry, duration) is
//! derived on demand from the raw data; nothing is cached.

use geo::{Coord, LineString};
use tracing::{error, warn};

use crate::geometry::{LngLat, decode_path};
use crate::otp::{OtpLeg, OtpMode};

use super::alert::LegAlert;
use super::style::LineStyle;

/// One segment of an itinerary, traveled with a single mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryLeg {
    raw: OtpLeg,
}

impl ItineraryLeg {
    pub fn new(raw: OtpLeg) -> Self {
        Self { raw }
    }

    pub fn mode(&self) -> &OtpMode {
        &self.raw.mode
    }

    /// Icon glyph for the leg's mode.
    ///
    /// Modes without a glyph log an error and yield an empty string, so
    /// the label still renders.
    pub fn emoji(&self) -> &'static str {
        match &self.raw.mode {
            OtpMode::Walk => "🚶\u{200d}♀\u{fe0f}",
            OtpMode::Bus | OtpMode::Transit => "🚍",
            OtpMode::Train | OtpMode::Rail => "🚆",
            OtpMode::Subway => "🚇",
            OtpMode::Bicycle => "🚲",
            OtpMode::CableCar | OtpMode::Tram => "🚊",
            OtpMode::Funicular => "🚡",
            OtpMode::Gondola => "🚠",
            OtpMode::Car => "🚙",
            OtpMode::Ferry => "⛴\u{fe0f}",
            OtpMode::Other(name) => {
                error!(mode = %name, "no emoji for mode");
                ""
            }
        }
    }

    /// Display label: glyph followed by the route's short name (or full
    /// name when there is no short name), e.g. `"🚍 42"`.
    pub fn short_name(&self) -> String {
        let name = self
            .raw
            .route_short_name
            .as_deref()
            .unwrap_or(&self.raw.route);
        format!("{} {}", self.emoji(), name).trim().to_string()
    }

    /// Decoded path of the leg, `(lng, lat)` ordered.
    ///
    /// Decodes on every call. An undecodable path logs a warning and
    /// yields an empty line.
    pub fn geometry(&self) -> LineString<f64> {
        decode_path(&self.raw.leg_geometry.points).unwrap_or_else(|e| {
            warn!(error = %e, mode = %self.raw.mode, "could not decode leg geometry");
            LineString::new(Vec::new())
        })
    }

    /// Coordinates of [`geometry`](Self::geometry) as a plain list.
    pub fn coordinates(&self) -> Vec<LngLat> {
        self.geometry().0
    }

    /// Paint style for drawing this leg.
    ///
    /// `active` is true when the leg belongs to the selected itinerary.
    pub fn paint_style(&self, active: bool) -> LineStyle {
        let footpath = self.raw.mode.is_foot_or_bicycle();
        match (active, footpath) {
            (true, true) => LineStyle::WalkingActive,
            (true, false) => match self.route_color() {
                Some(color) => LineStyle::ActiveColored(format!("#{color}")),
                None => LineStyle::Active,
            },
            (false, true) => LineStyle::WalkingInactive,
            (false, false) => LineStyle::Inactive,
        }
    }

    /// Route color without the leading `#`, if OTP provided a non-empty one.
    pub fn route_color(&self) -> Option<&str> {
        self.raw
            .route_color
            .as_deref()
            .filter(|color| !color.is_empty())
    }

    pub fn source_name(&self) -> &str {
        &self.raw.from.name
    }

    pub fn destination_name(&self) -> &str {
        &self.raw.to.name
    }

    pub fn source_lng_lat(&self) -> LngLat {
        Coord {
            x: self.raw.from.lon,
            y: self.raw.from.lat,
        }
    }

    pub fn destination_lng_lat(&self) -> LngLat {
        Coord {
            x: self.raw.to.lon,
            y: self.raw.to.lat,
        }
    }

    /// Travel time in seconds.
    ///
    /// A leg that ends before it starts logs a warning and counts as zero.
    pub fn duration(&self) -> f64 {
        let millis = self.raw.end_time.saturating_sub(self.raw.start_time);
        if millis < 0 {
            warn!(
                start_time = self.raw.start_time,
                end_time = self.raw.end_time,
                "leg ends before it starts"
            );
            return 0.0;
        }
        millis as f64 / 1000.0
    }

    pub fn transit_leg(&self) -> bool {
        self.raw.transit_leg
    }

    /// Departure, epoch milliseconds.
    pub fn start_time(&self) -> i64 {
        self.raw.start_time
    }

    /// Arrival, epoch milliseconds.
    pub fn end_time(&self) -> i64 {
        self.raw.end_time
    }

    /// Whether the times reflect real-time vehicle data.
    pub fn real_time(&self) -> bool {
        self.raw.real_time
    }

    /// Service alerts for this leg, possibly none.
    pub fn alerts(&self) -> Vec<LegAlert<'_>> {
        self.raw
            .alerts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(LegAlert::new)
            .collect()
    }

    pub fn has_alerts(&self) -> bool {
        self.alert_count() > 0
    }

    pub fn alert_count(&self) -> usize {
        self.raw.alerts.as_ref().map_or(0, Vec::len)
    }
}
