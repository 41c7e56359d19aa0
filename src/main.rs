//! Encore Server - Venue Event Planning System

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use encore_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("encore_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Encore Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Properties
        .route("/properties", get(api::properties::list_properties))
        .route("/properties", post(api::properties::create_property))
        .route("/properties/:id", get(api::properties::get_property))
        .route("/properties/:id", put(api::properties::update_property))
        .route("/properties/:id", delete(api::properties::delete_property))
        // Rooms
        .route("/properties/:id/rooms", get(api::rooms::list_rooms))
        .route("/properties/:id/rooms", post(api::rooms::create_room))
        .route("/properties/:id/rooms/suitable", get(api::rooms::find_suitable_rooms))
        .route("/properties/:id/rooms/capabilities", post(api::rooms::check_room_capabilities))
        .route("/rooms/:id", get(api::rooms::get_room))
        .route("/rooms/:id", put(api::rooms::update_room))
        .route("/rooms/:id", delete(api::rooms::delete_room))
        // Inventory
        .route("/properties/:id/inventory", get(api::inventory::list_inventory))
        .route("/properties/:id/inventory", post(api::inventory::create_inventory_item))
        .route("/inventory/:id", get(api::inventory::get_inventory_item))
        .route("/inventory/:id", put(api::inventory::update_inventory_item))
        .route("/inventory/:id", delete(api::inventory::delete_inventory_item))
        // Labor rules
        .route("/properties/:id/labor-rules", get(api::labor_rules::list_labor_rules))
        .route("/properties/:id/labor-rules", post(api::labor_rules::create_labor_rule))
        .route("/labor-rules/:id", get(api::labor_rules::get_labor_rule))
        .route("/labor-rules/:id", put(api::labor_rules::update_labor_rule))
        .route("/labor-rules/:id", delete(api::labor_rules::delete_labor_rule))
        // Unions
        .route("/properties/:id/unions", get(api::unions::list_unions))
        .route("/properties/:id/unions", post(api::unions::create_union))
        .route("/unions/:id", get(api::unions::get_union))
        .route("/unions/:id", put(api::unions::update_union))
        .route("/unions/:id", delete(api::unions::delete_union))
        .route("/unions/:id/schedule-rules", get(api::unions::list_schedule_rules))
        .route("/unions/:id/schedule-rules", post(api::unions::create_schedule_rule))
        .route("/schedule-rules/:id", delete(api::unions::delete_schedule_rule))
        .route("/unions/:id/equipment-requirements", get(api::unions::list_equipment_requirements))
        .route("/unions/:id/equipment-requirements", post(api::unions::create_equipment_requirement))
        .route("/equipment-requirements/:id", delete(api::unions::delete_equipment_requirement))
        .route("/unions/:id/venue-rules", get(api::unions::list_venue_rules))
        .route("/unions/:id/venue-rules", post(api::unions::create_venue_rule))
        .route("/venue-rules/:id", delete(api::unions::delete_venue_rule))
        // Validation engine
        .route("/properties/:id/validate-order", post(api::validation::validate_order))
        .route("/properties/:id/labor-plan", post(api::validation::calculate_labor))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
