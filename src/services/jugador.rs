use crate::database::models::{CreateJugadorRequest, JugadorDto, JugadorInput, JugadorMiniDto};
use crate::database::repositories::{EquipoRepository, JugadorRepository};
use crate::error::{es_violacion_fk, es_violacion_unica, AppError};

fn jugador_no_encontrado(id: i64) -> AppError {
    AppError::NotFound(format!("Jugador no encontrado con ID: {}", id))
}

fn input_from_request(request: CreateJugadorRequest) -> JugadorInput {
    JugadorInput {
        equipo_id: request.equipo_id,
        nombres: request.nombres.trim().to_string(),
        apellidos: request.apellidos.trim().to_string(),
        dorsal: request.dorsal,
        posicion: request.posicion,
        estatura_cm: request.estatura_cm,
        edad: request.edad,
        nacionalidad: request.nacionalidad,
        activo: request.activo.unwrap_or(true),
    }
}

/// Orchestrates the jugador invariants: the referenced equipo must exist and
/// a dorsal, when assigned, must be unique within its equipo.
#[derive(Clone)]
pub struct JugadorService {
    jugadores: JugadorRepository,
    equipos: EquipoRepository,
}

impl JugadorService {
    pub fn new(jugadores: JugadorRepository, equipos: EquipoRepository) -> Self {
        Self { jugadores, equipos }
    }

    /// With a team filter only the active roster is returned, ordered by
    /// apellidos then nombres; without it, every jugador in store order.
    pub async fn list(&self, equipo_id: Option<i64>) -> Result<Vec<JugadorDto>, AppError> {
        let jugadores = match equipo_id {
            Some(equipo_id) => self.jugadores.find_activos_por_equipo(equipo_id).await?,
            None => self.jugadores.find_all().await?,
        };
        Ok(jugadores.into_iter().map(JugadorDto::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<JugadorDto>, AppError> {
        let jugador = self.jugadores.find_by_id(id).await?;
        Ok(jugador.map(JugadorDto::from))
    }

    pub async fn create(&self, request: CreateJugadorRequest) -> Result<JugadorDto, AppError> {
        self.check_consistencia(&request, None).await?;

        let input = input_from_request(request);
        let dorsal = input.dorsal;

        let jugador = self.jugadores.create(input).await.map_err(|e| {
            match (es_violacion_unica(&e), dorsal) {
                (true, Some(dorsal)) => AppError::DorsalDuplicado(dorsal),
                _ => AppError::from(e),
            }
        })?;

        Ok(jugador.into())
    }

    pub async fn update(
        &self,
        id: i64,
        request: CreateJugadorRequest,
    ) -> Result<JugadorDto, AppError> {
        if self.jugadores.find_by_id(id).await?.is_none() {
            return Err(jugador_no_encontrado(id));
        }

        self.check_consistencia(&request, Some(id)).await?;

        let input = input_from_request(request);
        let dorsal = input.dorsal;

        let jugador = self
            .jugadores
            .update(id, input)
            .await
            .map_err(|e| match (es_violacion_unica(&e), dorsal) {
                (true, Some(dorsal)) => AppError::DorsalDuplicado(dorsal),
                _ => AppError::from(e),
            })?
            .ok_or_else(|| jugador_no_encontrado(id))?;

        Ok(jugador.into())
    }

    /// Force delete: no pre-check against match or foul involvement. When the
    /// datastore rejects the deletion over a foreign-key constraint, the
    /// operation fails as blocked; no related rows are removed.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let jugador = self
            .jugadores
            .find_by_id(id)
            .await?
            .ok_or_else(|| jugador_no_encontrado(id))?;

        log::info!(
            "Eliminando jugador {} ({})",
            id,
            jugador.nombre_completo()
        );

        match self.jugadores.delete(id).await {
            Ok(_) => Ok(()),
            Err(e) if es_violacion_fk(&e) => {
                log::warn!(
                    "Eliminación del jugador {} bloqueada por registros relacionados",
                    id
                );
                Err(AppError::EliminacionBloqueada)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn toggle_activo(&self, id: i64) -> Result<JugadorDto, AppError> {
        let jugador = self
            .jugadores
            .find_by_id(id)
            .await?
            .ok_or_else(|| jugador_no_encontrado(id))?;

        let jugador = self
            .jugadores
            .set_activo(id, !jugador.activo)
            .await?
            .ok_or_else(|| jugador_no_encontrado(id))?;

        Ok(jugador.into())
    }

    pub async fn list_por_partido(&self, partido_id: i64) -> Result<Vec<JugadorMiniDto>, AppError> {
        let filas = self.jugadores.find_por_partido(partido_id, None).await?;
        Ok(filas.into_iter().map(JugadorMiniDto::from).collect())
    }

    pub async fn list_por_partido_y_equipo(
        &self,
        partido_id: i64,
        equipo_id: i64,
    ) -> Result<Vec<JugadorMiniDto>, AppError> {
        let filas = self
            .jugadores
            .find_por_partido(partido_id, Some(equipo_id))
            .await?;
        Ok(filas.into_iter().map(JugadorMiniDto::from).collect())
    }

    /// Cross-entity checks shared by create and update: the referenced
    /// equipo must exist and an assigned dorsal must be free within it,
    /// excluding the record being updated.
    async fn check_consistencia(
        &self,
        request: &CreateJugadorRequest,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        if !self.equipos.exists_by_id(request.equipo_id).await? {
            return Err(AppError::EquipoInexistente(request.equipo_id));
        }

        if let Some(dorsal) = request.dorsal {
            if self
                .jugadores
                .exists_dorsal_en_equipo(request.equipo_id, dorsal, exclude_id)
                .await?
            {
                return Err(AppError::DorsalDuplicado(dorsal));
            }
        }

        Ok(())
    }
}
