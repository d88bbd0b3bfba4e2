//! HTTP transport — maps REST routes to [`BeerService`] calls.
//!
//! Uses axum for routing.
//!
//! ## Routes
//!
//! - `POST /api/v1/beers` — create a beer (201, 400 on duplicate/invalid).
//! - `GET /api/v1/beers` — list all beers.
//! - `GET /api/v1/beers/:name` — find one by name (200, 404).
//! - `PATCH /api/v1/beers/:id/increment` — raise stock (200, 400, 404).
//! - `PATCH /api/v1/beers/:id/decrement` — lower stock (200, 400, 404).
//! - `DELETE /api/v1/beers/:id` — remove by id (204, 404).
//! - `GET /health` — health check returning `{ "ok": true }`.
//!
//! PATCH bodies are `{ "quantity": <amount> }`. Error bodies are
//! `{ "message": "<text>" }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use beerstock::{http, BeerService, HashMapRepository};
//!
//! let service = Arc::new(BeerService::new(HashMapRepository::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone());
//!
//! // Or serve directly
//! http::serve(service, "0.0.0.0:8080").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::beer::{BeerId, NewBeer};
use crate::error::StockError;
use crate::repository::BeerRepository;
use crate::service::BeerService;

/// PATCH body for increment/decrement.
#[derive(Debug, Deserialize)]
struct QuantityPayload {
    quantity: i64,
}

/// Build an axum `Router` serving the beer stock API.
pub fn router<R>(service: Arc<BeerService<R>>) -> Router
where
    R: BeerRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/beers", axum::routing::post(create_beer).get(list_beers))
        .route("/api/v1/beers/:id", get(find_by_name).delete(delete_beer))
        .route("/api/v1/beers/:id/increment", patch(increment_stock))
        .route("/api/v1/beers/:id/decrement", patch(decrement_stock))
        .with_state(service)
}

/// Serve the API over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve<R>(service: Arc<BeerService<R>>, addr: &str) -> Result<(), std::io::Error>
where
    R: BeerRepository + Send + Sync + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "beerstock listening");
    axum::serve(listener, app).await
}

impl IntoResponse for StockError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// `POST /api/v1/beers` — 201 with the stored record, id included.
async fn create_beer<R: BeerRepository + Send + Sync + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    Json(draft): Json<NewBeer>,
) -> Result<impl IntoResponse, StockError> {
    let beer = service.create(draft)?;
    Ok((StatusCode::CREATED, Json(beer)))
}

async fn list_beers<R: BeerRepository + Send + Sync + 'static>(
    State(service): State<Arc<BeerService<R>>>,
) -> Result<impl IntoResponse, StockError> {
    let beers = service.list()?;
    Ok(Json(beers))
}

/// The path segment here is the beer *name*, not the id.
async fn find_by_name<R: BeerRepository + Send + Sync + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, StockError> {
    let beer = service.find_by_name(&name)?;
    Ok(Json(beer))
}

async fn delete_beer<R: BeerRepository + Send + Sync + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    Path(id): Path<BeerId>,
) -> Result<impl IntoResponse, StockError> {
    service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn increment_stock<R: BeerRepository + Send + Sync + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    Path(id): Path<BeerId>,
    Json(payload): Json<QuantityPayload>,
) -> Result<impl IntoResponse, StockError> {
    let beer = service.increment(id, payload.quantity)?;
    Ok(Json(beer))
}

async fn decrement_stock<R: BeerRepository + Send + Sync + 'static>(
    State(service): State<Arc<BeerService<R>>>,
    Path(id): Path<BeerId>,
    Json(payload): Json<QuantityPayload>,
) -> Result<impl IntoResponse, StockError> {
    let beer = service.decrement(id, payload.quantity)?;
    Ok(Json(beer))
}
