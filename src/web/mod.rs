use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::database::ActivityStore;
use crate::services::activities_service::CapacityPolicy;

pub mod routes;

use routes::activities;

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ActivityStore,
    pub capacity_policy: CapacityPolicy,
}

/// Builds the full application around `store`. Tests pass a fresh store per
/// case; `main` passes the seeded one.
pub fn router(store: ActivityStore, config: &Config) -> Router {
    let state = AppState {
        store,
        capacity_policy: config.capacity_policy,
    };

    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(&config.static_dir)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
