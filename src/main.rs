use std::net::SocketAddr;
use std::time::Duration;

use clinic_stock::config::Config;
use clinic_stock::db::create_pool;
use clinic_stock::middleware::AuthLayer;
use clinic_stock::proto::auth::auth_service_server::AuthServiceServer;
use clinic_stock::proto::health::health_server::HealthServer;
use clinic_stock::proto::inventory::inventory_service_server::InventoryServiceServer;
use clinic_stock::proto::notifications::notifications_service_server::NotificationsServiceServer;
use clinic_stock::proto::users::users_service_server::UsersServiceServer;
use clinic_stock::scanner::start_scanner;
use clinic_stock::services::{
    AuthServiceImpl, HealthServiceImpl, InventoryServiceImpl, NotificationsServiceImpl,
    UsersServiceImpl,
};

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Include file descriptor for gRPC reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("clinic_descriptor");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_stock=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting clinic-stock gRPC server...");
    tracing::info!("Connecting to database...");

    // Create database pool and apply migrations
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database connection established");

    // Spawn the periodic alert scanner
    let scan_interval = Duration::from_secs(config.scan_interval_secs);
    tracing::info!("Alert scanner interval: {:?}", scan_interval);
    tokio::spawn(start_scanner(pool.clone(), scan_interval));

    // Create services
    let auth_service = AuthServiceImpl::new(pool.clone(), config.jwt_secret.clone());
    let inventory_service = InventoryServiceImpl::new(pool.clone());
    let notifications_service = NotificationsServiceImpl::new(pool.clone());
    let users_service = UsersServiceImpl::new(pool.clone());
    let health_service = HealthServiceImpl::new();

    // CORS layer for gRPC-Web
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any);

    // Build reflection service
    let reflection_service = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()?;

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    // Build and run server with gRPC-Web support
    Server::builder()
        .accept_http1(true) // Required for gRPC-Web
        .layer(cors)
        .layer(tonic_web::GrpcWebLayer::new()) // Enable gRPC-Web
        .layer(AuthLayer::new(config.jwt_secret.clone()))
        .add_service(reflection_service)
        .add_service(AuthServiceServer::new(auth_service))
        .add_service(InventoryServiceServer::new(inventory_service))
        .add_service(NotificationsServiceServer::new(notifications_service))
        .add_service(UsersServiceServer::new(users_service))
        .add_service(HealthServer::new(health_service))
        .serve(addr)
        .await?;

    Ok(())
}
