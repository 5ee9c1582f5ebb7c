use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use field_sales::cache::redis_client::RedisClient;
use field_sales::cache::CacheConfig;
use field_sales::config::environment::EnvironmentConfig;
use field_sales::database::DatabaseConnection;
use field_sales::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use field_sales::routes;
use field_sales::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🧭 Field Sales - Tour Planning & Field Stock API");
    info!("================================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Inicializar Redis y cache
    let redis_url = std::env::var("REDIS_URL")
        .unwrap_or_else(|_| "redis://localhost:6379".to_string());

    let redis_config = CacheConfig { redis_url };

    let redis_client = match RedisClient::new(redis_config).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    // CORS: orígenes explícitos si están configurados
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let request_timeout = Duration::from_secs(config.request_timeout_secs);

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone(), redis_client);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🧑‍💼 Vendedores:");
    info!("   GET  /api/salesmen - Listar vendedores con elegibilidad");
    info!("🏪 Clientes y regiones:");
    info!("   GET  /api/customers - Buscar clientes candidatos (paginado)");
    info!("   GET  /api/regions - Listar regiones");
    info!("🗺️ Tours y visitas:");
    info!("   POST /api/visits/bulk-create - Crear tour con batch de visitas");
    info!("   GET  /api/journeys - Listar journeys (paginado, con estado)");
    info!("   GET  /api/journeys/latest/:sales_id - Journey más reciente");
    info!("📦 Stock de campo:");
    info!("   POST /api/fillups - Registrar entrega de stock");
    info!("   GET  /api/fillups - Listar fillups por vendedor");
    info!("   GET  /api/stock/:sales_id - Snapshot de stock agregado");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!("Error del servidor: {}", e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "field-sales",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
