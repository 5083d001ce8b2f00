//! The capability shared by every kind of trip candidate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::i18n::Localizer;

/// How a trip candidate gets the traveler there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Bike,
    Drive,
    Transit,
}

impl TravelMode {
    /// Localized mode name, e.g. "Transit".
    pub fn label(self, localizer: &dyn Localizer) -> String {
        let key = match self {
            TravelMode::Walk => "modes.walk",
            TravelMode::Bike => "modes.bike",
            TravelMode::Drive => "modes.drive",
            TravelMode::Transit => "modes.transit",
        };
        localizer.translate(key, &[])
    }
}

/// Unit system used for displayed distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnits {
    #[default]
    Kilometers,
    Miles,
}

/// Error returned when parsing an unknown distance unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown distance unit: {0}")]
pub struct InvalidDistanceUnits(String);

impl FromStr for DistanceUnits {
    type Err = InvalidDistanceUnits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "km" | "kilometers" => Ok(DistanceUnits::Kilometers),
            "mi" | "miles" => Ok(DistanceUnits::Miles),
            _ => Err(InvalidDistanceUnits(s.to_string())),
        }
    }
}

impl fmt::Display for DistanceUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnits::Kilometers => f.write_str("kilometers"),
            DistanceUnits::Miles => f.write_str("miles"),
        }
    }
}

/// A candidate trip the user can pick between.
///
/// Transit itineraries implement this alongside other candidate kinds
/// (driving, walking, cycling routes) so trip pickers can list them
/// uniformly.
pub trait Trip {
    /// Total duration in seconds.
    fn duration(&self) -> f64;

    /// Short-form localized duration, e.g. "25 min".
    fn duration_formatted(&self, localizer: &dyn Localizer) -> String;

    /// Rectangle covering the whole trip's geometry.
    fn bounds(&self) -> Bounds;

    fn mode(&self) -> TravelMode;

    /// Localized trip length, when it is worth showing.
    fn length_formatted(&self, localizer: &dyn Localizer) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EnglishLocalizer;

    #[test]
    fn parse_distance_units() {
        assert_eq!("km".parse::<DistanceUnits>(), Ok(DistanceUnits::Kilometers));
        assert_eq!("Miles".parse::<DistanceUnits>(), Ok(DistanceUnits::Miles));
        assert!("furlongs".parse::<DistanceUnits>().is_err());
    }

    #[test]
    fn default_units_are_metric() {
        assert_eq!(DistanceUnits::default(), DistanceUnits::Kilometers);
    }

    #[test]
    fn mode_labels() {
        assert_eq!(TravelMode::Transit.label(&EnglishLocalizer), "Transit");
        assert_eq!(TravelMode::Bike.label(&EnglishLocalizer), "Bike");
    }

    #[test]
    fn serde_names() {
        let mode = serde_json::to_string(&TravelMode::Transit).unwrap();
        let units = serde_json::to_string(&DistanceUnits::Miles).unwrap();

        assert_eq!(mode, r#""transit""#);
        assert_eq!(units, r#""miles""#);
    }
}
