pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use error::AppError;
use repository::AvisoRepository;
use services::mediator::Mediator;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub mediator: Arc<Mediator>,
    pub repository: Arc<dyn AvisoRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(repository: Arc<dyn AvisoRepository>, config: Config) -> Result<Self, AppError> {
        let mediator = services::avisos::build_mediator(repository.clone())?;
        Ok(Self {
            mediator: Arc::new(mediator),
            repository,
            config: Arc::new(config),
        })
    }
}

fn cors_layer(base_url: String) -> CorsLayer {
    let origin = AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        let Ok(o) = origin.to_str() else {
            return false;
        };
        // Local development
        if o.starts_with("http://localhost") || o.starts_with("http://127.0.0.1") {
            return true;
        }
        o == base_url
    });

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_origin(origin)
}

pub fn build_router(state: AppState) -> Router {
    let avisos = Router::new()
        .route(
            "/avisos",
            get(routes::avisos::list_avisos).post(routes::avisos::create_aviso),
        )
        .route(
            "/avisos/{id}",
            get(routes::avisos::get_aviso)
                .put(routes::avisos::update_aviso)
                .delete(routes::avisos::delete_aviso),
        );

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api/v1", avisos)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(state.config.app_base_url.clone()))
        .with_state(state)
}
