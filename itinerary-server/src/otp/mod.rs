//! OpenTripPlanner (OTP) plan API client.
//!
//! This module talks to the OTP REST `plan` endpoint and exposes its raw
//! response shapes. Nothing here interprets the data for display; that is
//! the job of [`crate::itinerary`].
//!
//! Key characteristics of OTP responses:
//! - Planning failures arrive as HTTP 200 with an `error` object
//! - Times are epoch milliseconds, durations are seconds
//! - Leg geometry is an encoded polyline (precision 5)

mod client;
mod error;
mod mock;
mod request;
mod types;

pub use client::{OtpClient, OtpConfig};
pub use error::OtpClientError;
pub use mock::MockPlanProvider;
pub use request::{PlanProvider, PlanRequest, QueryPairs};
pub use types::{
    EncodedPolyline, FROM_PLACE, OtpAlert, OtpFailure, OtpItinerary, OtpLeg, OtpMode, OtpPlace,
    Plan, PlanError, PlanErrorId, PlanResponse, ResponseError, TO_PLACE,
};
