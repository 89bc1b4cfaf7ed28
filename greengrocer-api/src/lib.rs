use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod error;
pub mod receipts;
pub mod response;
pub mod state;
pub mod vegetables;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .route("/vegetable/add", post(vegetables::add_vegetable))
        .route("/vegetable/update", post(vegetables::update_vegetable))
        .route("/vegetable/delete", post(vegetables::delete_vegetable))
        .route("/vegetable/cost", get(vegetables::vegetable_cost))
        .route("/vegetable/list", get(vegetables::list_vegetables))
        .route("/receipt/calculate", post(receipts::calculate_receipt))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
