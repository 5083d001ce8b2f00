//! Transit itineraries for display.
//!
//! Wraps raw OTP plan results in read-only views that derive what a trip
//! list and map need: leg labels and icons, route summaries, alerts,
//! bounds, paint styles and localized durations and distances. Failures are
//! folded into [`ItineraryError`].
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use itinerary_server::itinerary::{FetchRequest, Itinerary};
//! use itinerary_server::otp::{OtpClient, OtpConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OtpClient::new(OtpConfig::new("http://localhost:8080"))?;
//! let request = FetchRequest::new(
//!     Coord { x: -122.33, y: 47.60 },
//!     Coord { x: -122.30, y: 47.65 },
//! );
//!
//! for itinerary in Itinerary::fetch_best(&client, &request).await? {
//!     println!("{}", itinerary.via_route_formatted());
//! }
//! # Ok(())
//! # }
//! ```

mod alert;
mod error;
mod fetch;
mod leg;
mod model;
mod style;
#[cfg(test)]
mod test_support;
mod trip;

pub use alert::LegAlert;
pub use error::{ItineraryError, ItineraryErrorKind};
pub use fetch::{FetchRequest, MAX_ITINERARIES};
pub use leg::ItineraryLeg;
pub use model::Itinerary;
pub use style::{LinePaint, LineStyle};
pub use trip::{DistanceUnits, InvalidDistanceUnits, TravelMode, Trip};
