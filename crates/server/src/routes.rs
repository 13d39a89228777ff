use axum::{
    routing::{get, put},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod employees;
pub mod kpis;
pub mod machines;
pub mod orders;
pub mod products;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router. Collection paths use a trailing
/// slash; both forms of every path are registered.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let machines = Router::new()
        .route("/api/machines", get(machines::list).post(machines::create))
        .route("/api/machines/", get(machines::list).post(machines::create))
        .route("/api/machines/:id", put(machines::update).delete(machines::remove))
        .route("/api/machines/:id/", put(machines::update).delete(machines::remove));

    let products = Router::new()
        .route("/api/products", get(products::list).post(products::create))
        .route("/api/products/", get(products::list).post(products::create))
        .route("/api/products/:id", put(products::update).delete(products::remove))
        .route("/api/products/:id/", put(products::update).delete(products::remove));

    let employees = Router::new()
        .route("/api/employees", get(employees::list).post(employees::create))
        .route("/api/employees/", get(employees::list).post(employees::create))
        .route("/api/employees/:id", put(employees::update).delete(employees::remove))
        .route("/api/employees/:id/", put(employees::update).delete(employees::remove));

    let orders = Router::new()
        .route("/api/manufacturing-orders", get(orders::list).post(orders::create))
        .route("/api/manufacturing-orders/", get(orders::list).post(orders::create))
        .route(
            "/api/manufacturing-orders/:id",
            get(orders::get_by_id).put(orders::update).delete(orders::remove),
        )
        .route(
            "/api/manufacturing-orders/:id/",
            get(orders::get_by_id).put(orders::update).delete(orders::remove),
        )
        .route("/api/manufacturing-orders/:id/status", put(orders::update_status))
        .route("/api/manufacturing-orders/:id/status/", put(orders::update_status));

    let kpis = Router::new()
        .route("/api/kpis/orders-status-count", get(kpis::orders_status_count))
        .route("/api/kpis/machine-status-count", get(kpis::machine_status_count))
        .route("/api/kpis/product-stock-alerts", get(kpis::product_stock_alerts))
        .route("/api/kpis/employee-workload", get(kpis::employee_workload))
        .route("/api/kpis/orders-trend", get(kpis::orders_trend))
        .route("/api/kpis/machine-utilization", get(kpis::machine_utilization));

    Router::new()
        .route("/health", get(health))
        .merge(machines)
        .merge(products)
        .merge(employees)
        .merge(orders)
        .merge(kpis)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
