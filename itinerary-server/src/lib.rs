//! Transit itinerary server.
//!
//! Asks an OpenTripPlanner instance for transit trips and turns its raw
//! responses into display-ready itineraries: leg labels, route summaries,
//! alerts, map bounds and paint styles, localized durations and distances,
//! and classified errors the UI can explain.

pub mod cache;
pub mod config;
pub mod format;
pub mod geometry;
pub mod i18n;
pub mod itinerary;
pub mod otp;
pub mod web;
