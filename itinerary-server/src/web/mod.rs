//! Web layer for the itinerary server.
//!
//! Provides a JSON endpoint that plans transit trips and returns them ready
//! for display.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
