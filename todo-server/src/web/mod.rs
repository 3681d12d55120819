use axum::Router;
use axum::http::{HeaderValue, Method, header};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::todo::controller::{DefaultTodoController, TodoController};
use crate::todo::repository::SeaOrmTodoRepository;
use crate::todo::service::DefaultTodoService;

pub mod api;

/// Builds the todo pipeline on top of a database connection:
/// repository → service → controller.
pub fn create_todo_controller(db: Arc<DatabaseConnection>) -> Arc<dyn TodoController> {
    let repository = SeaOrmTodoRepository::new(db);
    let service = DefaultTodoService::new(repository);
    Arc::new(DefaultTodoController::new(service))
}

/// Creates the application router without transport layers.
pub fn create_app(db: Arc<DatabaseConnection>) -> Router {
    let controller = create_todo_controller(db);
    Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(api::create_api_router(controller))
}

/// CORS policy for the API: configured origins, the methods the API uses,
/// and `Location` exposed so clients can follow created resources.
pub fn create_cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = match config.allowed_origins() {
        None => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(origins.iter().filter_map(|origin| {
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, err);
                    None
                }
            }
        })),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION])
}

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let server_address = format!("0.0.0.0:{}", &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let db = Database::connect(&config.database_url).await?;
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    let app = create_app(Arc::new(db)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&config)),
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}
