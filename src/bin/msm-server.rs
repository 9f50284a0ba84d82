//! Minimal read-only query backend over the unit list.
//!
//! Serves the unit shape from an in-memory store seeded from a JSON file
//! at startup. There are no write endpoints and no persistence; a missing
//! or malformed seed file degrades to an empty store so the API still
//! answers with empty results.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use msm_inspector::model::{Unit, UnitStatus};

#[derive(Parser, Debug)]
#[command(name = "msm-server")]
#[command(about = "Read-only unit lookup API over an in-memory store")]
#[command(version)]
struct Args {
    /// JSON file seeding the in-memory unit store
    #[arg(long, default_value = "data/units.json")]
    data: std::path::PathBuf,

    /// Port to listen on
    #[arg(long, default_value_t = 3001)]
    port: u16,
}

/// One stored record: the unit shape plus the store's integer id.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUnit {
    id: u32,
    #[serde(flatten)]
    unit: Unit,
}

struct AppState {
    units: Vec<StoredUnit>,
}

/// Failures surfaced by the query handlers, rendered as `{"error": …}`
/// bodies without internal detail.
enum ApiError {
    /// Unusable request input, e.g. an unknown status filter.
    BadRequest(String),
    /// Lookup missed.
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound => (StatusCode::NOT_FOUND, "unit not found".to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let units = load_store(&args.data);
    info!(count = units.len(), "unit store seeded");

    let state = Arc::new(AppState { units });

    let app = Router::new()
        .route("/api/units", get(list_units))
        .route("/api/units/{id}", get(get_unit))
        .route("/api/units/search/{term}", get(search_units))
        .route("/api/units/filter/{status}", get(filter_units))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Seed the store. Failures degrade to an empty store with a logged
/// diagnostic rather than aborting startup.
fn load_store(path: &std::path::Path) -> Vec<StoredUnit> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(%err, path = %path.display(), "unreadable seed file; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(units) => units,
        Err(err) => {
            warn!(%err, path = %path.display(), "malformed seed file; starting empty");
            Vec::new()
        }
    }
}

async fn list_units(State(state): State<Arc<AppState>>) -> Json<Vec<StoredUnit>> {
    Json(state.units.clone())
}

async fn get_unit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<StoredUnit>, ApiError> {
    state
        .units
        .iter()
        .find(|stored| stored.id == id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Substring match on unit number or block name, case-insensitive.
async fn search_units(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Json<Vec<StoredUnit>> {
    let needle = term.to_lowercase();
    let hits: Vec<StoredUnit> = state
        .units
        .iter()
        .filter(|stored| {
            stored.unit.unit_number.to_lowercase().contains(&needle)
                || stored.unit.block.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    debug!(%term, count = hits.len(), "search");
    Json(hits)
}

/// Filter by sale status; only `available` and `sold` are accepted.
async fn filter_units(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<StoredUnit>>, ApiError> {
    let wanted = match status.as_str() {
        "available" => UnitStatus::Available,
        "sold" => UnitStatus::Sold,
        _ => {
            return Err(ApiError::BadRequest(format!(
                "unsupported status filter '{status}'"
            )))
        }
    };

    let hits: Vec<StoredUnit> = state
        .units
        .iter()
        .filter(|stored| stored.unit.status == wanted)
        .cloned()
        .collect();

    debug!(status = wanted.as_str(), count = hits.len(), "filter");
    Ok(Json(hits))
}
