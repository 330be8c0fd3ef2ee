use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::database::models::CreateEquipoRequest;
use crate::error::AppError;
use crate::services::EquipoService;
use crate::validation;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquiposQuery {
    pub solo_activos: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct NombreQuery {
    pub nombre: String,
}

pub async fn get_equipos(
    service: web::Data<EquipoService>,
    query: web::Query<EquiposQuery>,
) -> Result<HttpResponse, AppError> {
    let equipos = if query.solo_activos.unwrap_or(true) {
        service.list_activos().await?
    } else {
        service.list_todos().await?
    };
    Ok(HttpResponse::Ok().json(equipos))
}

pub async fn get_equipo(
    service: web::Data<EquipoService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    match service.get_by_id(path.into_inner()).await? {
        Some(equipo) => Ok(HttpResponse::Ok().json(equipo)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

pub async fn create_equipo(
    service: web::Data<EquipoService>,
    input: web::Json<CreateEquipoRequest>,
) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    validation::validar_equipo(&request).map_err(AppError::Validacion)?;

    let equipo = service.create(request).await?;
    Ok(HttpResponse::Created().json(equipo))
}

pub async fn update_equipo(
    service: web::Data<EquipoService>,
    path: web::Path<i64>,
    input: web::Json<CreateEquipoRequest>,
) -> Result<HttpResponse, AppError> {
    let request = input.into_inner();
    validation::validar_equipo(&request).map_err(AppError::Validacion)?;

    let equipo = service.update(path.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(equipo))
}

pub async fn delete_equipo(
    service: web::Data<EquipoService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn toggle_activo(
    service: web::Data<EquipoService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let equipo = service.toggle_activo(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(equipo))
}

pub async fn buscar_por_nombre(
    service: web::Data<EquipoService>,
    query: web::Query<NombreQuery>,
) -> Result<HttpResponse, AppError> {
    match service.find_by_nombre(&query.nombre).await? {
        Some(equipo) => Ok(HttpResponse::Ok().json(equipo)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

pub async fn existe_por_nombre(
    service: web::Data<EquipoService>,
    query: web::Query<NombreQuery>,
) -> Result<HttpResponse, AppError> {
    let exists = service.exists_by_nombre(&query.nombre).await?;
    Ok(HttpResponse::Ok().json(exists))
}
