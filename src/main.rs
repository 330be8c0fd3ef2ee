use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Result;

use marcador_api::database::{
    init_database,
    repositories::{EquipoRepository, JugadorRepository},
};
use marcador_api::routes;
use marcador_api::services::{EquipoService, JugadorService};
use marcador_api::Config;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Marcador CRUD API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting Marcador CRUD API server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    println!("✅ Database initialized");

    // Initialize repositories and services
    let equipo_repository = EquipoRepository::new(pool.clone());
    let jugador_repository = JugadorRepository::new(pool.clone());
    let equipo_service =
        EquipoService::new(equipo_repository.clone(), jugador_repository.clone());
    let jugador_service = JugadorService::new(jugador_repository, equipo_repository);

    let equipo_service_data = web::Data::new(equipo_service);
    let jugador_service_data = web::Data::new(jugador_service);
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    println!("🌐 Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(equipo_service_data.clone())
            .app_data(jugador_service_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&config.client_base_url)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
