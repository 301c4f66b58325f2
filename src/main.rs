use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use studysphere::{config::Config, db::Database, routes, seed, swagger, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;

    db.ensure_indexes().await?;
    seed::seed_lessons(&db).await?;

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    let images = ServeDir::new(&config.images_path)
        .not_found_service(routes::images::image_not_found.into_service());

    let app = Router::new()
        .route("/api/health", get(studysphere::health_check))
        .nest("/api/lessons", routes::lessons::router())
        .nest("/api/orders", routes::orders::router())
        .nest("/api/search", routes::search::router())
        .merge(swagger::create_swagger_router())
        .nest_service("/images", images)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    info!("Server starting on {}", config.server_address);

    axum::serve(listener, app).await?;

    Ok(())
}
