//! Transit itinerary type.

use chrono::FixedOffset;
use tracing::warn;

use crate::format::{
    DurationFormat, format_distance, format_duration, format_time, kilometers_to_miles,
};
use crate::geometry::Bounds;
use crate::i18n::Localizer;
use crate::otp::{OtpItinerary, OtpLeg};

use super::alert::LegAlert;
use super::leg::ItineraryLeg;
use super::trip::{DistanceUnits, TravelMode, Trip};

const VIA_SEPARATOR: &str = " → ";
const ALERT_MARKER: &str = "⚠️";

/// A complete transit itinerary: ordered legs from origin to destination.
///
/// Immutable after construction; every derived property is computed from
/// the raw OTP data on access.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<ItineraryLeg>,
    duration: i64,
    start_time: i64,
    end_time: i64,
    walk_distance: f64,
    distance_units: DistanceUnits,
    with_bicycle: bool,
}

impl Itinerary {
    pub fn from_otp(raw: OtpItinerary, distance_units: DistanceUnits, with_bicycle: bool) -> Self {
        if raw.legs.is_empty() {
            warn!(start_time = raw.start_time, "itinerary has no legs");
        } else if !legs_in_order(&raw.legs) {
            warn!(start_time = raw.start_time, "itinerary legs out of order");
        }

        Self {
            legs: raw.legs.into_iter().map(ItineraryLeg::new).collect(),
            duration: raw.duration,
            start_time: raw.start_time,
            end_time: raw.end_time,
            walk_distance: raw.walk_distance,
            distance_units,
            with_bicycle,
        }
    }

    pub fn legs(&self) -> &[ItineraryLeg] {
        &self.legs
    }

    /// Departure, epoch milliseconds.
    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// Arrival, epoch milliseconds.
    pub fn end_time(&self) -> i64 {
        self.end_time
    }

    pub fn distance_units(&self) -> DistanceUnits {
        self.distance_units
    }

    /// Whether bicycle legs were allowed when planning.
    pub fn with_bicycle(&self) -> bool {
        self.with_bicycle
    }

    /// Localized departure and arrival times, e.g. `"9:00 AM - 9:30 AM"`.
    pub fn start_stop_times_formatted(
        &self,
        localizer: &dyn Localizer,
        offset: &FixedOffset,
    ) -> String {
        let start = format_time(self.start_time, offset);
        let end = format_time(self.end_time, offset);
        localizer.translate(
            "time_range$startTime$endTime",
            &[("startTime", &start), ("endTime", &end)],
        )
    }

    /// Distance covered outside transit vehicles, in meters.
    ///
    /// Usually walking, but biking when planned with a bicycle.
    pub fn foot_distance_meters(&self) -> f64 {
        self.walk_distance
    }

    /// Foot distance in the display unit, labelled as walking or biking.
    pub fn formatted_foot_distance(&self, localizer: &dyn Localizer) -> String {
        let km = self.foot_distance_meters() / 1000.0;
        let distance = match self.distance_units {
            DistanceUnits::Kilometers => format_distance(km, DistanceUnits::Kilometers, localizer),
            DistanceUnits::Miles => {
                format_distance(kilometers_to_miles(km), DistanceUnits::Miles, localizer)
            }
        };

        let key = if self.with_bicycle {
            "bike_distance"
        } else {
            "walk_distance"
        };
        localizer.translate(key, &[("preformattedDistance", &distance)])
    }

    /// Leg labels joined by arrows, with a warning marker on legs that
    /// carry alerts, e.g. `"🚶‍♀️ → 🚍 42⚠️ → 🚶‍♀️"`.
    pub fn via_route_formatted(&self) -> String {
        self.legs
            .iter()
            .map(|leg| {
                let mut label = leg.short_name();
                if leg.has_alerts() {
                    label.push_str(ALERT_MARKER);
                }
                label
            })
            .collect::<Vec<_>>()
            .join(VIA_SEPARATOR)
    }

    /// Alerts across all legs, in leg order.
    pub fn alerts(&self) -> Vec<LegAlert<'_>> {
        self.legs.iter().flat_map(ItineraryLeg::alerts).collect()
    }

    pub fn has_alerts(&self) -> bool {
        self.legs.iter().any(ItineraryLeg::has_alerts)
    }

    /// The first transit leg, looking no further than the second leg.
    ///
    /// At most one access leg precedes the first transit leg.
    pub fn first_transit_leg(&self) -> Option<&ItineraryLeg> {
        self.legs.iter().take(2).find(|leg| leg.transit_leg())
    }
}

/// Whether every leg runs forwards in time and starts no earlier than the
/// previous leg ends.
fn legs_in_order(legs: &[OtpLeg]) -> bool {
    legs.iter().all(|leg| leg.end_time >= leg.start_time)
        && legs.windows(2).all(|w| w[1].start_time >= w[0].end_time)
}

impl Trip for Itinerary {
    fn duration(&self) -> f64 {
        self.duration as f64
    }

    fn duration_formatted(&self, localizer: &dyn Localizer) -> String {
        format_duration(self.duration(), DurationFormat::Shortform, localizer)
    }

    fn bounds(&self) -> Bounds {
        self.legs
            .iter()
            .flat_map(ItineraryLeg::coordinates)
            .collect()
    }

    fn mode(&self) -> TravelMode {
        TravelMode::Transit
    }

    fn length_formatted(&self, _localizer: &dyn Localizer) -> Option<String> {
        None
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::itinerary::test_support::{alert, bus, itinerary};
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = (f64, f64)> {
        // Five decimal places survive polyline encoding exactly.
        (-18_000_000i64..18_000_000, -9_000_000i64..9_000_000)
            .prop_map(|(x, y)| (x as f64 / 1e5, y as f64 / 1e5))
    }

    fn paths() -> impl Strategy<Value = Vec<Vec<(f64, f64)>>> {
        prop::collection::vec(prop::collection::vec(coordinate(), 1..6), 1..5)
    }

    fn build(paths: &[Vec<(f64, f64)>]) -> Itinerary {
        let legs = paths
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let start = i as i64 * 60;
                bus("1", start, start + 60, path)
            })
            .collect();
        Itinerary::from_otp(itinerary(legs, 0.0), DistanceUnits::Kilometers, false)
    }

    proptest! {
        #[test]
        fn bounds_contain_every_coordinate(paths in paths()) {
            let it = build(&paths);
            let bounds = it.bounds();

            for leg in it.legs() {
                for coord in leg.coordinates() {
                    prop_assert!(bounds.contains(&coord));
                }
            }
        }

        #[test]
        fn bounds_ignore_leg_order(paths in paths()) {
            let forward = build(&paths);
            let mut reversed_paths = paths.clone();
            reversed_paths.reverse();
            let reversed = build(&reversed_paths);

            prop_assert_eq!(forward.bounds(), reversed.bounds());
        }

        #[test]
        fn alert_count_is_sum_of_legs(counts in prop::collection::vec(0usize..4, 1..5)) {
            let legs = counts
                .iter()
                .map(|&n| {
                    let mut leg = bus("1", 0, 60, &[(0.0, 0.0), (0.1, 0.1)]);
                    leg.alerts = Some((0..n).map(|i| alert(&i.to_string())).collect());
                    leg
                })
                .collect();
            let it = Itinerary::from_otp(itinerary(legs, 0.0), DistanceUnits::Kilometers, false);

            let total: usize = counts.iter().sum();
            prop_assert_eq!(it.alerts().len(), total);
            prop_assert_eq!(it.has_alerts(), total > 0);
        }
    }
}
