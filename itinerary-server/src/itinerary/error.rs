//! Classified itinerary fetch errors.
//!
//! OTP reports failures in two unrelated shapes (see [`OtpFailure`]). This
//! module folds both into a closed set of kinds the UI knows how to explain.

use std::fmt;

use tracing::error;

use crate::i18n::Localizer;
use crate::otp::{OtpFailure, PlanErrorId};

/// Why no itineraries could be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItineraryErrorKind {
    /// The origin is outside the transit coverage area.
    SourceOutsideBounds,
    /// The destination is outside the transit coverage area.
    DestinationOutsideBounds,
    /// The deployment has no transit routing configured.
    TransitServiceDisabled,
    /// Anything else.
    Other,
}

impl ItineraryErrorKind {
    /// Stable machine-readable name, e.g. `"destination_outside_bounds"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ItineraryErrorKind::SourceOutsideBounds => "source_outside_bounds",
            ItineraryErrorKind::DestinationOutsideBounds => "destination_outside_bounds",
            ItineraryErrorKind::TransitServiceDisabled => "transit_service_disabled",
            ItineraryErrorKind::Other => "other",
        }
    }

    /// Message key for the user-facing explanation of this kind.
    pub fn message_key(self) -> &'static str {
        match self {
            ItineraryErrorKind::SourceOutsideBounds => "transit_area_not_supported_for_source",
            ItineraryErrorKind::DestinationOutsideBounds => {
                "transit_area_not_supported_for_destination"
            }
            ItineraryErrorKind::TransitServiceDisabled => "transit_routing_not_enabled",
            ItineraryErrorKind::Other => "transit_trip_error_unknown",
        }
    }
}

impl fmt::Display for ItineraryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItineraryErrorKind::SourceOutsideBounds => "origin outside coverage area",
            ItineraryErrorKind::DestinationOutsideBounds => "destination outside coverage area",
            ItineraryErrorKind::TransitServiceDisabled => "transit routing disabled",
            ItineraryErrorKind::Other => "transit trip error",
        };
        f.write_str(s)
    }
}

/// A classified failure to fetch itineraries.
///
/// Carries the upstream diagnostic message when OTP provided one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct ItineraryError {
    kind: ItineraryErrorKind,
    message: Option<String>,
}

impl ItineraryError {
    pub fn new(kind: ItineraryErrorKind, message: Option<String>) -> Self {
        Self { kind, message }
    }

    /// Classify a raw OTP failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_server::itinerary::{ItineraryError, ItineraryErrorKind};
    /// use itinerary_server::otp::{OtpFailure, ResponseError};
    ///
    /// let err = ItineraryError::from_otp(&OtpFailure::Response(ResponseError { status: 404 }));
    /// assert_eq!(err.kind(), ItineraryErrorKind::TransitServiceDisabled);
    /// assert_eq!(err.message(), None);
    /// ```
    pub fn from_otp(failure: &OtpFailure) -> Self {
        match failure {
            OtpFailure::Plan(plan_error) => match plan_error.id {
                PlanErrorId::OutsideBounds => {
                    if plan_error.is_missing_destination() {
                        Self::new(
                            ItineraryErrorKind::DestinationOutsideBounds,
                            Some(plan_error.msg.clone()),
                        )
                    } else {
                        // OTP only reports OUTSIDE_BOUNDS with at least one missing place.
                        if !plan_error.is_missing_origin() {
                            error!(
                                missing = ?plan_error.missing,
                                "OUTSIDE_BOUNDS without a missing place"
                            );
                        }
                        debug_assert!(
                            plan_error.is_missing_origin(),
                            "OUTSIDE_BOUNDS without FROM_PLACE or TO_PLACE: {:?}",
                            plan_error.missing
                        );
                        Self::new(
                            ItineraryErrorKind::SourceOutsideBounds,
                            Some(plan_error.msg.clone()),
                        )
                    }
                }
                _ => Self::new(ItineraryErrorKind::Other, Some(plan_error.message.clone())),
            },
            OtpFailure::Response(response_error) => match response_error.status {
                // Transit routing is absent from the deployment.
                404 => Self::new(ItineraryErrorKind::TransitServiceDisabled, None),
                _ => Self::new(ItineraryErrorKind::Other, None),
            },
        }
    }

    pub fn kind(&self) -> ItineraryErrorKind {
        self.kind
    }

    /// Diagnostic message from OTP, if any. Not meant for end users.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// User-facing explanation of this error.
    pub fn localized_message(&self, localizer: &dyn Localizer) -> String {
        localizer.translate(self.kind.message_key(), &[])
    }
}

impl From<OtpFailure> for ItineraryError {
    fn from(failure: OtpFailure) -> Self {
        Self::from_otp(&failure)
    }
}
