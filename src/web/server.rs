use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::kinship::path::PathFinder;
use crate::kinship::pivot::PivotResolver;
use crate::kinship::relations::FamilyAccessor;
use crate::registry::store::PersonRegistry;
use crate::suggest::engine::{PersonQuery, SuggestEngine, DEFAULT_SUGGEST_LIMIT};

/// Upper bound on suggestion/search result counts requested via the API
pub const MAX_RESULT_LIMIT: usize = 100;

/// Shared application state
pub struct AppState {
    pub registry: PersonRegistry,
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
}

/// Create a safe error response that avoids echoing internals to the
/// client while logging the detail server-side.
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
    }
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(create_safe_error_response("not_found", message, None)),
    )
        .into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs, dataset: Option<PathBuf>) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args, dataset).await })
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router(dataset: Option<PathBuf>) -> anyhow::Result<Router> {
    let registry = match dataset {
        Some(path) => PersonRegistry::load_from_file(&path)?,
        None => PersonRegistry::load_embedded()?,
    };
    let state = Arc::new(AppState { registry });

    // IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .unwrap();

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/registry", get(registry_handler))
        .route("/api/person/{id}", get(person_handler))
        .route("/api/person/{id}/relatives", get(relatives_handler))
        .route("/api/suggest", get(suggest_handler))
        .route("/api/search", get(search_handler))
        .route("/api/path", get(path_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Rate limiting to prevent abuse
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(100)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs, dataset: Option<PathBuf>) -> anyhow::Result<()> {
    let app = create_router(dataset)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting lignage API server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Endpoint listing, so the root answers something useful
async fn index_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "lignage",
        "endpoints": [
            "/api/registry",
            "/api/person/{id}",
            "/api/person/{id}/relatives",
            "/api/suggest?nom=&nomPere=&nomGrandPere=&limit=",
            "/api/search?q=",
            "/api/path?from=&to=",
        ],
    }))
}

/// Dataset summary
async fn registry_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let registry = &state.registry;

    let with_father = registry.persons.iter().filter(|p| p.pere_id.is_some()).count();
    let with_mother = registry.persons.iter().filter(|p| p.mere_id.is_some()).count();
    let with_clan = registry.persons.iter().filter(|p| p.clan.is_some()).count();

    Json(serde_json::json!({
        "persons": registry.len(),
        "with_father": with_father,
        "with_mother": with_mother,
        "with_clan": with_clan,
    }))
}

/// Resolve an identifier and return the person record
async fn person_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.registry.resolve(&id) {
        Some(person) => Json(person).into_response(),
        None => not_found("No person found for this identifier"),
    }
}

/// Father/mother/children/unions of a person
async fn relatives_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let accessor = FamilyAccessor::new(&state.registry);
    match accessor.relatives(&id) {
        Some(relatives) => Json(relatives).into_response(),
        None => not_found("No person found for this identifier"),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestParams {
    nom: Option<String>,
    nom_pere: Option<String>,
    nom_grand_pere: Option<String>,
    limit: Option<usize>,
}

/// Ranked suggestions for a partial name query
async fn suggest_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestParams>,
) -> Json<serde_json::Value> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_SUGGEST_LIMIT)
        .min(MAX_RESULT_LIMIT);

    let query = PersonQuery {
        nom: params.nom,
        nom_pere: params.nom_pere,
        nom_grand_pere: params.nom_grand_pere,
    };

    let engine = SuggestEngine::new(&state.registry);
    let matches = engine.suggest(&query, limit);

    Json(serde_json::json!({ "matches": matches }))
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Substring search over full display names
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<serde_json::Value> {
    let engine = SuggestEngine::new(&state.registry);
    let mut found = engine.search(params.q.as_deref().unwrap_or(""));
    found.truncate(MAX_RESULT_LIMIT);

    Json(serde_json::json!({ "persons": found }))
}

#[derive(Deserialize)]
struct PathParams {
    from: String,
    to: String,
}

/// Shortest kinship chain plus its pivot structure
async fn path_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PathParams>,
) -> Response {
    let finder = PathFinder::new(&state.registry);
    let Some(path) = finder.find_path(&params.from, &params.to) else {
        return not_found("No kinship chain between these identifiers");
    };

    let pivot = PivotResolver::new(&state.registry).resolve(&path, &params.from);

    Json(serde_json::json!({ "steps": path, "pivot": pivot })).into_response()
}
