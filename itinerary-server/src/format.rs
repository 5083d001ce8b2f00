//! Display formatting for distances, durations and clock times.
//!
//! All user-visible text goes through a [`Localizer`]; this module only does
//! the arithmetic and picks message keys.

use chrono::{DateTime, FixedOffset};

use crate::i18n::Localizer;
use crate::itinerary::DistanceUnits;

const MILES_PER_KILOMETER: f64 = 0.621_371;

/// Verbosity of a formatted duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationFormat {
    /// "1 hour 5 minutes"
    Longform,
    /// "1 hr 5 min"
    Shortform,
}

impl DurationFormat {
    fn catalogue(self) -> &'static str {
        match self {
            DurationFormat::Longform => "times",
            DurationFormat::Shortform => "times_shortform",
        }
    }
}

/// Convert kilometers to statute miles.
pub fn kilometers_to_miles(km: f64) -> f64 {
    km * MILES_PER_KILOMETER
}

/// Format a distance already expressed in `units`, e.g. `"2 km"`.
///
/// Short distances keep one decimal place; a trailing `.0` is dropped.
pub fn format_distance(value: f64, units: DistanceUnits, localizer: &dyn Localizer) -> String {
    let number = if value < 10.0 {
        let rounded = (value * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{rounded:.0}")
        } else {
            format!("{rounded:.1}")
        }
    } else {
        format!("{:.0}", value.round())
    };

    let abbreviation = match units {
        DistanceUnits::Kilometers => localizer.translate("shortened_distances.kilometers", &[]),
        DistanceUnits::Miles => localizer.translate("shortened_distances.miles", &[]),
    };

    format!("{number} {abbreviation}")
}

/// Format a duration given in seconds.
///
/// Durations under a minute are shown in seconds; longer ones are broken
/// into day, hour and minute components, omitting zero components.
pub fn format_duration(seconds: f64, format: DurationFormat, localizer: &dyn Localizer) -> String {
    let catalogue = format.catalogue();
    let total = seconds.max(0.0).round() as u64;

    if total < 60 {
        let n = total.to_string();
        return localizer.translate(&format!("{catalogue}.$n_seconds"), &[("n", &n)]);
    }

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;

    let mut parts = Vec::with_capacity(3);
    for (n, singular, plural) in [
        (days, "$n_day", "$n_days"),
        (hours, "$n_hour", "$n_hours"),
        (minutes, "$n_minute", "$n_minutes"),
    ] {
        if n == 0 {
            continue;
        }
        let key = if n == 1 { singular } else { plural };
        let key = format!("{catalogue}.{key}");
        let value = n.to_string();
        parts.push(localizer.translate(&key, &[("n", &value)]));
    }

    parts.join(" ")
}

/// Format an epoch-millisecond timestamp as a clock time, e.g. `"9:05 AM"`.
///
/// Timestamps outside chrono's representable range render as an empty
/// string.
pub fn format_time(epoch_millis: i64, offset: &FixedOffset) -> String {
    let Some(utc) = DateTime::from_timestamp_millis(epoch_millis) else {
        return String::new();
    };
    utc.with_timezone(offset).format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EnglishLocalizer;

    #[test]
    fn whole_kilometers_drop_decimal() {
        assert_eq!(
            format_distance(2.0, DistanceUnits::Kilometers, &EnglishLocalizer),
            "2 km"
        );
    }

    #[test]
    fn short_distance_keeps_one_decimal() {
        assert_eq!(
            format_distance(1.24, DistanceUnits::Miles, &EnglishLocalizer),
            "1.2 mi"
        );
    }

    #[test]
    fn long_distance_is_rounded() {
        assert_eq!(
            format_distance(12.6, DistanceUnits::Kilometers, &EnglishLocalizer),
            "13 km"
        );
    }

    #[test]
    fn miles_conversion() {
        assert!((kilometers_to_miles(1.609_344) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn duration_seconds() {
        assert_eq!(
            format_duration(42.0, DurationFormat::Longform, &EnglishLocalizer),
            "42 seconds"
        );
    }

    #[test]
    fn duration_minutes_shortform() {
        assert_eq!(
            format_duration(600.0, DurationFormat::Shortform, &EnglishLocalizer),
            "10 min"
        );
    }

    #[test]
    fn duration_singular_and_plural() {
        assert_eq!(
            format_duration(3_660.0, DurationFormat::Longform, &EnglishLocalizer),
            "1 hour 1 minute"
        );
        assert_eq!(
            format_duration(7_500.0, DurationFormat::Longform, &EnglishLocalizer),
            "2 hours 5 minutes"
        );
    }

    #[test]
    fn duration_skips_zero_components() {
        let seconds = 86_400.0 + 120.0;
        assert_eq!(
            format_duration(seconds, DurationFormat::Shortform, &EnglishLocalizer),
            "1 day 2 min"
        );
    }

    #[test]
    fn clock_time_in_offset() {
        let utc = FixedOffset::east_opt(0).unwrap();
        // 2024-03-15T09:05:00Z
        assert_eq!(format_time(1_710_493_500_000, &utc), "9:05 AM");

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_time(1_710_493_500_000, &plus_two), "11:05 AM");
    }
}
