//! Builders for OTP fixtures shared by the itinerary tests.

use geo::Coord;

use crate::geometry::OTP_POLYLINE_PRECISION;
use crate::otp::{EncodedPolyline, OtpAlert, OtpItinerary, OtpLeg, OtpMode, OtpPlace};

/// Encode `(lng, lat)` pairs the way OTP does.
pub fn encode(coords: &[(f64, f64)]) -> String {
    polyline::encode_coordinates(
        coords.iter().map(|&(x, y)| Coord { x, y }),
        OTP_POLYLINE_PRECISION,
    )
    .unwrap()
}

pub fn alert(header: &str) -> OtpAlert {
    OtpAlert {
        alert_header_text: header.to_string(),
        alert_description_text: format!("{header} details"),
    }
}

/// A leg running from `start_s` to `end_s` seconds after the epoch along
/// `coords`.
pub fn leg(mode: OtpMode, start_s: i64, end_s: i64, coords: &[(f64, f64)]) -> OtpLeg {
    let transit_leg = !mode.is_foot_or_bicycle() && mode != OtpMode::Car;
    let first = coords.first().copied().unwrap_or_default();
    let last = coords.last().copied().unwrap_or_default();

    OtpLeg {
        mode,
        route_short_name: None,
        route: String::new(),
        route_color: None,
        from: OtpPlace {
            name: "From".into(),
            lon: first.0,
            lat: first.1,
        },
        to: OtpPlace {
            name: "To".into(),
            lon: last.0,
            lat: last.1,
        },
        start_time: start_s * 1000,
        end_time: end_s * 1000,
        transit_leg,
        real_time: false,
        leg_geometry: EncodedPolyline {
            points: encode(coords),
            length: Some(coords.len() as u32),
        },
        alerts: None,
    }
}

/// A bus leg on route `short_name`.
pub fn bus(short_name: &str, start_s: i64, end_s: i64, coords: &[(f64, f64)]) -> OtpLeg {
    OtpLeg {
        route_short_name: Some(short_name.to_string()),
        route: format!("Route {short_name}"),
        ..leg(OtpMode::Bus, start_s, end_s, coords)
    }
}

pub fn walk(start_s: i64, end_s: i64, coords: &[(f64, f64)]) -> OtpLeg {
    leg(OtpMode::Walk, start_s, end_s, coords)
}

/// An itinerary spanning its legs, with the given non-transit distance.
pub fn itinerary(legs: Vec<OtpLeg>, walk_distance: f64) -> OtpItinerary {
    let start_time = legs.first().map_or(0, |l| l.start_time);
    let end_time = legs.last().map_or(0, |l| l.end_time);

    OtpItinerary {
        legs,
        duration: (end_time - start_time) / 1000,
        start_time,
        end_time,
        walk_distance,
    }
}

/// walk(0–300s) → bus 42 (300–900s, one alert) → walk(900–1000s).
pub fn walk_bus_walk() -> OtpItinerary {
    let mut bus_leg = bus(
        "42",
        300,
        900,
        &[(-122.30, 47.60), (-122.32, 47.62), (-122.35, 47.65)],
    );
    bus_leg.alerts = Some(vec![alert("Detour")]);

    itinerary(
        vec![
            walk(0, 300, &[(-122.29, 47.59), (-122.30, 47.60)]),
            bus_leg,
            walk(900, 1000, &[(-122.35, 47.65), (-122.36, 47.66)]),
        ],
        450.0,
    )
}
