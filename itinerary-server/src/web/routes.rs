//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use geo::Coord;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::itinerary::{
    DistanceUnits, FetchRequest, Itinerary, ItineraryError, ItineraryErrorKind,
};
use crate::otp::PlanProvider;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P: PlanProvider + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/itineraries", get(itineraries::<P>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan transit itineraries between two coordinates.
async fn itineraries<P: PlanProvider + 'static>(
    State(state): State<AppState<P>>,
    query: Result<Query<ItinerariesQuery>, QueryRejection>,
) -> Result<Json<ItinerariesResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;
    let request = fetch_request(query)?;

    let found = Itinerary::fetch_best(state.provider.as_ref(), &request)
        .await
        .map_err(|error| AppError::Itinerary {
            body: ErrorBody::from_itinerary_error(&error, state.localizer.as_ref()),
            error,
        })?;
    info!(count = found.len(), "planned itineraries");

    let localizer = state.localizer.as_ref();
    let offset = &state.display_offset;
    let itineraries = found
        .iter()
        .map(|it| ItineraryResult::from_itinerary(it, localizer, offset))
        .collect();

    Ok(Json(ItinerariesResponse { itineraries }))
}

/// Validate the query and turn it into a fetch request.
fn fetch_request(query: ItinerariesQuery) -> Result<FetchRequest, AppError> {
    let from = coordinate("from", query.from_lng, query.from_lat)?;
    let to = coordinate("to", query.to_lng, query.to_lat)?;

    let distance_units = match query.units.as_deref() {
        Some(units) => units
            .parse::<DistanceUnits>()
            .map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?,
        None => DistanceUnits::default(),
    };

    Ok(FetchRequest {
        from,
        to,
        distance_units,
        departure_time: query.time,
        departure_date: query.date,
        arrive_by: query.arrive_by,
        with_bicycle: query.with_bicycle.unwrap_or(false),
    })
}

fn coordinate(which: &str, lng: f64, lat: f64) -> Result<Coord<f64>, AppError> {
    let valid = lng.is_finite()
        && lat.is_finite()
        && (-180.0..=180.0).contains(&lng)
        && (-90.0..=90.0).contains(&lat);
    if !valid {
        return Err(AppError::BadRequest {
            message: format!("Invalid {which} coordinate: {lng},{lat}"),
        });
    }
    Ok(Coord { x: lng, y: lat })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
    },
    Itinerary {
        error: ItineraryError,
        body: ErrorBody,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        kind: "bad_request".to_string(),
                        user_message: message.clone(),
                        message: Some(message),
                    },
                )
            }
            AppError::Itinerary { error, body } => {
                let status = match error.kind() {
                    ItineraryErrorKind::SourceOutsideBounds
                    | ItineraryErrorKind::DestinationOutsideBounds => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    ItineraryErrorKind::TransitServiceDisabled => StatusCode::SERVICE_UNAVAILABLE,
                    ItineraryErrorKind::Other => StatusCode::BAD_GATEWAY,
                };
                warn!(%error, %status, "itinerary fetch failed");
                (status, body)
            }
        };

        (status, Json(ErrorResponse { error: body })).into_response()
    }
}
