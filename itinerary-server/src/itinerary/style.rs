//! Line paint styles for drawing legs on a map.

use serde::Serialize;

const ACTIVE_COLOR: &str = "#1976D2";
const INACTIVE_COLOR: &str = "#777777";
const WALKING_ACTIVE_COLOR: &str = "#1976D2";
const WALKING_INACTIVE_COLOR: &str = "#AAAAAA";

/// Which of the fixed line styles a leg is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStyle {
    /// Transit leg of the selected itinerary, no route color known.
    Active,
    /// Transit leg of the selected itinerary, tinted with its route color
    /// (`#RRGGBB`).
    ActiveColored(String),
    /// Transit leg of an itinerary that is not selected.
    Inactive,
    /// Walking or cycling leg of the selected itinerary.
    WalkingActive,
    /// Walking or cycling leg of an itinerary that is not selected.
    WalkingInactive,
}

impl LineStyle {
    /// Map-renderer paint properties for this style.
    pub fn paint(&self) -> LinePaint {
        match self {
            LineStyle::Active => LinePaint::solid(ACTIVE_COLOR, 6.0, 1.0),
            LineStyle::ActiveColored(color) => LinePaint::solid(color, 6.0, 1.0),
            LineStyle::Inactive => LinePaint::solid(INACTIVE_COLOR, 4.0, 0.6),
            LineStyle::WalkingActive => LinePaint::dotted(WALKING_ACTIVE_COLOR, 4.0, 1.0),
            LineStyle::WalkingInactive => LinePaint::dotted(WALKING_INACTIVE_COLOR, 3.0, 0.6),
        }
    }
}

/// Line layer paint properties, named as map style specs name them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinePaint {
    pub line_color: String,
    pub line_width: f64,
    pub line_opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_dasharray: Option<[f64; 2]>,
}

impl LinePaint {
    fn solid(color: &str, width: f64, opacity: f64) -> Self {
        Self {
            line_color: color.to_string(),
            line_width: width,
            line_opacity: opacity,
            line_dasharray: None,
        }
    }

    fn dotted(color: &str, width: f64, opacity: f64) -> Self {
        Self {
            line_dasharray: Some([0.5, 2.0]),
            ..Self::solid(color, width, opacity)
        }
    }
}
