use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::database::models::{CreateJugadorRequest, JugadorDto};
use crate::error::AppError;
use crate::services::JugadorService;
use crate::validation;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JugadoresQuery {
    pub equipo_id: Option<i64>,
}

pub async fn get_jugadores(
    service: web::Data<JugadorService>,
    query: web::Query<JugadoresQuery>,
) -> Result<HttpResponse, AppError> {
    // Contract quirk carried over from the original API: a listing failure
    // degrades to an empty list instead of surfacing an error.
    let jugadores = match service.list(query.equipo_id).await {
        Ok(jugadores) => jugadores,
        Err(e) => {
            log::error!("Error listando jugadores: {}", e);
            Vec::<JugadorDto>::new()
        }
    };
    Ok(HttpResponse::Ok().json(jugadores))
}

pub async fn get_jugador(
    service: web::Data<JugadorService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    match service.get_by_id(path.into_inner()).await? {
        Some(jugador) => Ok(HttpResponse::Ok().json(jugador)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

pub async fn create_jugador(
    service: web::Data<JugadorService>,
    input: web::Json<CreateJugadorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    validation::validar_jugador(&request).map_err(AppError::Validacion)?;

    let jugador = service.create(request).await?;
    Ok(HttpResponse::Created().json(jugador))
}

pub async fn update_jugador(
    service: web::Data<JugadorService>,
    path: web::Path<i64>,
    input: web::Json<CreateJugadorRequest>,
) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    validation::validar_jugador(&request).map_err(AppError::Validacion)?;

    let jugador = service.update(path.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(jugador))
}

pub async fn delete_jugador(
    service: web::Data<JugadorService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn toggle_activo(
    service: web::Data<JugadorService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let jugador = service.toggle_activo(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(jugador))
}

pub async fn get_jugadores_por_partido(
    service: web::Data<JugadorService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let jugadores = service.list_por_partido(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(jugadores))
}

pub async fn get_jugadores_por_partido_y_equipo(
    service: web::Data<JugadorService>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (partido_id, equipo_id) = path.into_inner();
    let jugadores = service
        .list_por_partido_y_equipo(partido_id, equipo_id)
        .await?;
    Ok(HttpResponse::Ok().json(jugadores))
}
