use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Jugador {
    pub id: i64,
    pub equipo_id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub dorsal: Option<i16>,
    pub posicion: Option<String>,
    pub estatura_cm: Option<i16>,
    pub edad: Option<i16>,
    pub nacionalidad: Option<String>,
    pub activo: bool,
}

impl Jugador {
    /// Derived full name, never stored.
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.nombres, self.apellidos)
    }
}

/// Request body shared by create and update (full field replacement).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJugadorRequest {
    pub equipo_id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub dorsal: Option<i16>,
    pub posicion: Option<String>,
    pub estatura_cm: Option<i16>,
    pub edad: Option<i16>,
    pub nacionalidad: Option<String>,
    pub activo: Option<bool>,
}

/// Trimmed, defaulted values the repository persists.
#[derive(Debug, Clone)]
pub struct JugadorInput {
    pub equipo_id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub dorsal: Option<i16>,
    pub posicion: Option<String>,
    pub estatura_cm: Option<i16>,
    pub edad: Option<i16>,
    pub nacionalidad: Option<String>,
    pub activo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JugadorDto {
    pub id: i64,
    pub equipo_id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub dorsal: Option<i16>,
    pub posicion: Option<String>,
    pub estatura_cm: Option<i16>,
    pub edad: Option<i16>,
    pub nacionalidad: Option<String>,
    pub activo: bool,
    pub nombre_completo: String,
}

impl From<Jugador> for JugadorDto {
    fn from(jugador: Jugador) -> Self {
        let nombre_completo = jugador.nombre_completo();
        JugadorDto {
            id: jugador.id,
            equipo_id: jugador.equipo_id,
            nombres: jugador.nombres,
            apellidos: jugador.apellidos,
            dorsal: jugador.dorsal,
            posicion: jugador.posicion,
            estatura_cm: jugador.estatura_cm,
            edad: jugador.edad,
            nacionalidad: jugador.nacionalidad,
            activo: jugador.activo,
            nombre_completo,
        }
    }
}

/// Raw row of the partido_jugador projection query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JugadorMiniRow {
    pub id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub dorsal: Option<i16>,
    pub posicion: Option<String>,
    pub es_titular: bool,
    pub activo: bool,
}

/// Read-only view of a jugador joined with their match participation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JugadorMiniDto {
    pub id: i64,
    pub nombres: String,
    pub apellidos: String,
    pub dorsal: Option<i16>,
    pub posicion: Option<String>,
    pub es_titular: bool,
    pub activo: bool,
    pub nombre_completo: String,
}

impl From<JugadorMiniRow> for JugadorMiniDto {
    fn from(row: JugadorMiniRow) -> Self {
        let nombre_completo = format!("{} {}", row.nombres, row.apellidos);
        JugadorMiniDto {
            id: row.id,
            nombres: row.nombres,
            apellidos: row.apellidos,
            dorsal: row.dorsal,
            posicion: row.posicion,
            es_titular: row.es_titular,
            activo: row.activo,
            nombre_completo,
        }
    }
}
