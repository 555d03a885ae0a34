use axum::http::{header, Method};
use axum::middleware;
use axum::routing::{delete, get, MethodRouter};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::handler::{self, AppState};

fn collection_routes() -> MethodRouter<AppState> {
    get(handler::list_notes).post(handler::create_note)
}

/// Routes of the notes resource, relative to its root.
fn notes_routes() -> Router<AppState> {
    Router::new()
        .route("/", collection_routes())
        .route("/clear/all", delete(handler::clear_notes))
        .route(
            "/:id",
            get(handler::get_note)
                .put(handler::update_note)
                .delete(handler::delete_note),
        )
}

/// Build the axum router with all endpoints. CORS and request tracing are
/// added by [`build_app`].
pub fn build_router(state: AppState, expose_banner: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(handler::health_handler))
        .route("/info", get(handler::info_handler));
    if expose_banner {
        router = router.route("/", get(handler::banner_handler));
    }
    let root = state.notes_root.to_string();
    router
        .route(&format!("{root}/"), collection_routes())
        .nest(&root, notes_routes())
        .layer(middleware::map_response(handler::method_not_allowed_body))
        .fallback(handler::not_found_handler)
        .with_state(state)
}

/// CORS policy for the configured browser origins.
pub fn cors_layer(config: &ServerConfig) -> ServerResult<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_header_values()?))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Build the full application: routes plus tracing and CORS middleware.
pub fn build_app(config: &ServerConfig, state: AppState) -> ServerResult<Router> {
    config.validate()?;
    Ok(build_router(state, config.expose_banner)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}
