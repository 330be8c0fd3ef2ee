use crate::database::models::{CreateEquipoRequest, EquipoDto, EquipoInput};
use crate::database::repositories::{EquipoRepository, JugadorRepository};
use crate::error::{es_violacion_unica, AppError};

fn equipo_no_encontrado(id: i64) -> AppError {
    AppError::NotFound(format!("Equipo no encontrado con ID: {}", id))
}

fn input_from_request(request: CreateEquipoRequest) -> EquipoInput {
    EquipoInput {
        nombre: request.nombre.trim().to_string(),
        ciudad: request.ciudad.map(|c| c.trim().to_string()),
        abreviatura: request.abreviatura.map(|a| a.trim().to_string()),
        activo: request.activo.unwrap_or(true),
    }
}

/// Orchestrates the equipo invariants: unique trimmed case-insensitive name,
/// transactional cascade delete of the roster, toggle semantics.
#[derive(Clone)]
pub struct EquipoService {
    equipos: EquipoRepository,
    jugadores: JugadorRepository,
}

impl EquipoService {
    pub fn new(equipos: EquipoRepository, jugadores: JugadorRepository) -> Self {
        Self { equipos, jugadores }
    }

    pub async fn list_activos(&self) -> Result<Vec<EquipoDto>, AppError> {
        let equipos = self.equipos.find_activos().await?;
        Ok(equipos.into_iter().map(EquipoDto::from).collect())
    }

    pub async fn list_todos(&self) -> Result<Vec<EquipoDto>, AppError> {
        let equipos = self.equipos.find_all().await?;
        Ok(equipos.into_iter().map(EquipoDto::from).collect())
    }

    /// Absence is a valid outcome, not an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<EquipoDto>, AppError> {
        let equipo = self.equipos.find_by_id(id).await?;
        Ok(equipo.map(EquipoDto::from))
    }

    pub async fn create(&self, request: CreateEquipoRequest) -> Result<EquipoDto, AppError> {
        if self.equipos.exists_by_nombre(&request.nombre).await? {
            return Err(AppError::NombreDuplicado(request.nombre.trim().to_string()));
        }

        let input = input_from_request(request);
        let nombre = input.nombre.clone();

        let equipo = self.equipos.create(input).await.map_err(|e| {
            if es_violacion_unica(&e) {
                AppError::NombreDuplicado(nombre)
            } else {
                AppError::from(e)
            }
        })?;

        Ok(equipo.into())
    }

    pub async fn update(
        &self,
        id: i64,
        request: CreateEquipoRequest,
    ) -> Result<EquipoDto, AppError> {
        if !self.equipos.exists_by_id(id).await? {
            return Err(equipo_no_encontrado(id));
        }

        if self
            .equipos
            .exists_by_nombre_excluding(&request.nombre, id)
            .await?
        {
            return Err(AppError::NombreDuplicado(request.nombre.trim().to_string()));
        }

        let input = input_from_request(request);
        let nombre = input.nombre.clone();

        let equipo = self
            .equipos
            .update(id, input)
            .await
            .map_err(|e| {
                if es_violacion_unica(&e) {
                    AppError::NombreDuplicado(nombre)
                } else {
                    AppError::from(e)
                }
            })?
            .ok_or_else(|| equipo_no_encontrado(id))?;

        Ok(equipo.into())
    }

    /// Deletes the equipo together with its entire roster (cascade).
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.equipos.exists_by_id(id).await? {
            return Err(equipo_no_encontrado(id));
        }

        let jugadores = self.jugadores.find_por_equipo(id).await?;
        if !jugadores.is_empty() {
            log::info!(
                "Eliminando {} jugadores del equipo {}",
                jugadores.len(),
                id
            );
        }

        self.equipos.delete_con_jugadores(id).await?;
        Ok(())
    }

    /// Flips exactly the activo flag; every other field is left unchanged.
    pub async fn toggle_activo(&self, id: i64) -> Result<EquipoDto, AppError> {
        let equipo = self
            .equipos
            .find_by_id(id)
            .await?
            .ok_or_else(|| equipo_no_encontrado(id))?;

        let equipo = self
            .equipos
            .set_activo(id, !equipo.activo)
            .await?
            .ok_or_else(|| equipo_no_encontrado(id))?;

        Ok(equipo.into())
    }

    pub async fn find_by_nombre(&self, nombre: &str) -> Result<Option<EquipoDto>, AppError> {
        let equipo = self.equipos.find_by_nombre(nombre).await?;
        Ok(equipo.map(EquipoDto::from))
    }

    pub async fn exists_by_nombre(&self, nombre: &str) -> Result<bool, AppError> {
        Ok(self.equipos.exists_by_nombre(nombre).await?)
    }
}
