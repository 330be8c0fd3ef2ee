use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team row. The logo blob lives here but is never exposed through the
/// transfer shape below.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Equipo {
    pub id: i64,
    pub nombre: String,
    pub ciudad: Option<String>,
    pub abreviatura: Option<String>,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
    pub logo: Option<Vec<u8>>,
}

/// Request body shared by create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipoRequest {
    pub nombre: String,
    pub ciudad: Option<String>,
    pub abreviatura: Option<String>,
    pub activo: Option<bool>,
}

/// Trimmed, defaulted values the repository persists.
#[derive(Debug, Clone)]
pub struct EquipoInput {
    pub nombre: String,
    pub ciudad: Option<String>,
    pub abreviatura: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipoDto {
    pub id: i64,
    pub nombre: String,
    pub ciudad: Option<String>,
    pub abreviatura: Option<String>,
    pub activo: bool,
    pub fecha_creacion: DateTime<Utc>,
}

impl From<Equipo> for EquipoDto {
    fn from(equipo: Equipo) -> Self {
        EquipoDto {
            id: equipo.id,
            nombre: equipo.nombre,
            ciudad: equipo.ciudad,
            abreviatura: equipo.abreviatura,
            activo: equipo.activo,
            fecha_creacion: equipo.fecha_creacion,
        }
    }
}
