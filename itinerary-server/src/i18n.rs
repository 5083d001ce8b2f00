//! Localized display strings.
//!
//! Formatting code never reaches for a global translation table. Instead it
//! takes a [`Localizer`], which maps a message key plus named parameters to a
//! display string. Any `Fn(&str, &[(&str, &str)]) -> String` is a localizer,
//! so tests can inject a closure.

use tracing::warn;

/// Translates message keys into display strings.
///
/// Keys are dotted paths into a message catalogue (e.g.
/// `"times_shortform.$n_minutes"`). Parameters are substituted into
/// `{name}` placeholders.
pub trait Localizer: Send + Sync {
    /// Translate `key`, substituting `params` into the message.
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str, &[(&str, &str)]) -> String + Send + Sync,
{
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        self(key, params)
    }
}

/// English (en-US) message catalogue.
const EN_US: &[(&str, &str)] = &[
    (
        "transit_area_not_supported_for_source",
        "Sorry, trips starting here are outside of our current transit coverage area.",
    ),
    (
        "transit_area_not_supported_for_destination",
        "Sorry, this destination is outside of our current transit coverage area.",
    ),
    (
        "transit_trip_error_unknown",
        "Sorry, unable to find transit directions for this trip.",
    ),
    (
        "transit_routing_not_enabled",
        "Transit directions are disabled or incorrectly configured. Please contact the server administrator",
    ),
    ("times.$n_seconds", "{n} seconds"),
    ("times.$n_minute", "{n} minute"),
    ("times.$n_minutes", "{n} minutes"),
    ("times.$n_hour", "{n} hour"),
    ("times.$n_hours", "{n} hours"),
    ("times.$n_day", "{n} day"),
    ("times.$n_days", "{n} days"),
    ("times_shortform.$n_seconds", "{n} sec"),
    ("times_shortform.$n_minute", "{n} min"),
    ("times_shortform.$n_minutes", "{n} min"),
    ("times_shortform.$n_hour", "{n} hr"),
    ("times_shortform.$n_hours", "{n} hr"),
    ("times_shortform.$n_day", "{n} day"),
    ("times_shortform.$n_days", "{n} day"),
    ("time_range$startTime$endTime", "{startTime} - {endTime}"),
    ("modes.transit", "Transit"),
    ("modes.drive", "Drive"),
    ("modes.bike", "Bike"),
    ("modes.walk", "Walk"),
    ("shortened_distances.kilometers", "km"),
    ("shortened_distances.miles", "mi"),
    ("walk_distance", "{preformattedDistance} walk"),
    ("bike_distance", "{preformattedDistance} bike"),
];

/// Built-in en-US localizer.
///
/// Unknown keys are logged and echoed back verbatim, so a missing message
/// shows up on screen instead of failing the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        match EN_US.iter().find(|(k, _)| *k == key) {
            Some((_, template)) => interpolate(template, params),
            None => {
                warn!(key, "missing translation");
                key.to_string()
            }
        }
    }
}

/// Replace each `{name}` placeholder in `template` with its parameter.
///
/// Placeholders without a matching parameter are left as-is.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_key() {
        let loc = EnglishLocalizer;
        assert_eq!(
            loc.translate("walk_distance", &[("preformattedDistance", "2 km")]),
            "2 km walk"
        );
        assert_eq!(loc.translate("shortened_distances.miles", &[]), "mi");
    }

    #[test]
    fn unknown_key_is_echoed() {
        let loc = EnglishLocalizer;
        assert_eq!(loc.translate("no_such_key", &[]), "no_such_key");
    }

    #[test]
    fn interpolate_multiple_params() {
        let out = interpolate(
            "{startTime} - {endTime}",
            &[("startTime", "9:00 AM"), ("endTime", "9:30 AM")],
        );
        assert_eq!(out, "9:00 AM - 9:30 AM");
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("{n} min", &[]), "{n} min");
    }

    #[test]
    fn closure_is_a_localizer() {
        let loc = |key: &str, _: &[(&str, &str)]| format!("<{key}>");
        assert_eq!(loc.translate("modes.walk", &[]), "<modes.walk>");
    }
}
