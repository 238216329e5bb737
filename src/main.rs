use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fleet_maintenance::config::environment::EnvironmentConfig;
use fleet_maintenance::database::DatabaseConnection;
use fleet_maintenance::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use fleet_maintenance::routes;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚚 Fleet Maintenance - Backend de mantenimiento de flota");
    info!("========================================================");

    let config = EnvironmentConfig::from_env();
    info!("🔧 Entorno: {}", config.environment);

    // Inicializar base de datos (corre migraciones)
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    let pool = db_connection.pool().clone();
    info!("✅ PostgreSQL conectado exitosamente");

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(pool);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/maintenance", routes::maintenance_routes::create_maintenance_router())
        .nest("/api/checklist", routes::checklist_routes::create_checklist_router())
        .nest("/api/fueling", routes::fueling_routes::create_fueling_router())
        .nest("/api/fine", routes::fine_routes::create_fine_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehicle:");
    info!("   POST /api/vehicle - Registrar vehículo");
    info!("   GET  /api/vehicle - Listar vehículos (búsqueda ?plate=)");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo (cascada)");
    info!("🔧 Maintenance:");
    info!("   POST /api/maintenance - Registrar mantenimiento");
    info!("   GET  /api/maintenance - Listar (?vehicle_id&year&month)");
    info!("   DELETE /api/maintenance/:id - Eliminar mantenimiento");
    info!("📋 Checklist:");
    info!("   POST /api/checklist - Iniciar checklist");
    info!("   PUT  /api/checklist/:id/result - Registrar resultado");
    info!("   GET  /api/checklist - Listar (?vehicle_id&status)");
    info!("   GET  /api/checklist/:id - Obtener checklist");
    info!("   DELETE /api/checklist/:id - Eliminar checklist");
    info!("⛽ Fueling:");
    info!("   POST /api/fueling - Registrar abastecimiento");
    info!("   GET  /api/fueling - Listar (?vehicle_id&year&month)");
    info!("🚦 Fine:");
    info!("   POST /api/fine - Registrar multa");
    info!("   GET  /api/fine - Listar (?vehicle_id&status)");
    info!("   PUT  /api/fine/:id - Actualizar multa");
    info!("   DELETE /api/fine/:id - Eliminar multa");
    info!("📊 Dashboard y reportes:");
    info!("   GET  /api/dashboard/summary - Resumen de flota");
    info!("   GET  /api/dashboard/maintenance-schedule - Próximos mantenimientos");
    info!("   GET  /api/reports/fuel - Reporte de combustible");
    info!("   GET  /api/reports/expenses - Libro mayor de gastos");
    info!("   GET  /api/reports/expenses/monthly - Desglose mensual (?year)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de health check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-maintenance",
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
