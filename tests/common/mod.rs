use actix_web::web;
use anyhow::Result;
use sqlx::SqlitePool;
use tempfile::NamedTempFile;

use marcador_api::database::init_database;
use marcador_api::database::models::{
    CreateEquipoRequest, CreateJugadorRequest, EquipoDto, JugadorDto,
};
use marcador_api::database::repositories::{EquipoRepository, JugadorRepository};
use marcador_api::routes;
use marcador_api::services::{EquipoService, JugadorService};

/// Isolated file-backed database with the schema applied.
pub struct TestContext {
    pub pool: SqlitePool,
    _temp_file: NamedTempFile,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let temp_file = NamedTempFile::new()?;
        let database_url = format!("sqlite:{}", temp_file.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestContext {
            pool,
            _temp_file: temp_file,
        })
    }

    pub fn equipo_service(&self) -> EquipoService {
        EquipoService::new(
            EquipoRepository::new(self.pool.clone()),
            JugadorRepository::new(self.pool.clone()),
        )
    }

    pub fn jugador_service(&self) -> JugadorService {
        JugadorService::new(
            JugadorRepository::new(self.pool.clone()),
            EquipoRepository::new(self.pool.clone()),
        )
    }

    // Fixture helpers go through the services so the rows carry the same
    // trimming/defaulting the API applies.

    pub async fn sembrar_equipo(&self, nombre: &str) -> EquipoDto {
        self.equipo_service()
            .create(CreateEquipoRequest {
                nombre: nombre.to_string(),
                ciudad: None,
                abreviatura: None,
                activo: None,
            })
            .await
            .unwrap()
    }

    pub async fn sembrar_jugador(
        &self,
        equipo_id: i64,
        nombres: &str,
        apellidos: &str,
        dorsal: Option<i16>,
    ) -> JugadorDto {
        self.jugador_service()
            .create(CreateJugadorRequest {
                equipo_id,
                nombres: nombres.to_string(),
                apellidos: apellidos.to_string(),
                dorsal,
                posicion: None,
                estatura_cm: None,
                edad: None,
                nacionalidad: None,
                activo: None,
            })
            .await
            .unwrap()
    }

    /// Inserts a partido plus its partido_jugador rows directly; the
    /// match-tracking tables are externally owned and have no API here.
    pub async fn sembrar_partido(&self, participantes: &[(i64, bool)]) -> i64 {
        let partido_id: i64 = sqlx::query_scalar(
            "INSERT INTO partido (fecha) VALUES (date('now')) RETURNING partido_id",
        )
        .fetch_one(&self.pool)
        .await
        .unwrap();

        for (jugador_id, es_titular) in participantes {
            sqlx::query(
                "INSERT INTO partido_jugador (partido_id, jugador_id, es_titular) VALUES (?, ?, ?)",
            )
            .bind(partido_id)
            .bind(jugador_id)
            .bind(es_titular)
            .execute(&self.pool)
            .await
            .unwrap();
        }

        partido_id
    }
}

/// App wiring shared by every integration test: the two services as app
/// data plus the full /api route tree.
pub fn app_config(pool: &SqlitePool) -> impl Fn(&mut web::ServiceConfig) {
    let equipos = EquipoRepository::new(pool.clone());
    let jugadores = JugadorRepository::new(pool.clone());
    let equipo_service = web::Data::new(EquipoService::new(equipos.clone(), jugadores.clone()));
    let jugador_service = web::Data::new(JugadorService::new(jugadores, equipos));

    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(equipo_service.clone());
        cfg.app_data(jugador_service.clone());
        routes::configure(cfg);
    }
}
