use sqlx::SqlitePool;

use crate::database::models::{Jugador, JugadorInput, JugadorMiniRow};

const JUGADOR_COLUMNS: &str = "jugador_id AS id, equipo_id, nombres, apellidos, dorsal, \
     posicion, estatura_cm, edad, nacionalidad, activo";

#[derive(Clone)]
pub struct JugadorRepository {
    pool: SqlitePool,
}

impl JugadorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: JugadorInput) -> Result<Jugador, sqlx::Error> {
        let jugador = sqlx::query_as::<_, Jugador>(&format!(
            r#"
            INSERT INTO jugador
                (equipo_id, nombres, apellidos, dorsal, posicion, estatura_cm,
                 edad, nacionalidad, activo)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {JUGADOR_COLUMNS}
            "#
        ))
        .bind(input.equipo_id)
        .bind(input.nombres)
        .bind(input.apellidos)
        .bind(input.dorsal)
        .bind(input.posicion)
        .bind(input.estatura_cm)
        .bind(input.edad)
        .bind(input.nacionalidad)
        .bind(input.activo)
        .fetch_one(&self.pool)
        .await?;

        Ok(jugador)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Jugador>, sqlx::Error> {
        let jugador = sqlx::query_as::<_, Jugador>(&format!(
            "SELECT {JUGADOR_COLUMNS} FROM jugador WHERE jugador_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(jugador)
    }

    pub async fn find_all(&self) -> Result<Vec<Jugador>, sqlx::Error> {
        let jugadores =
            sqlx::query_as::<_, Jugador>(&format!("SELECT {JUGADOR_COLUMNS} FROM jugador"))
                .fetch_all(&self.pool)
                .await?;

        Ok(jugadores)
    }

    /// Active roster of a team, ordered by apellidos then nombres.
    pub async fn find_activos_por_equipo(
        &self,
        equipo_id: i64,
    ) -> Result<Vec<Jugador>, sqlx::Error> {
        let jugadores = sqlx::query_as::<_, Jugador>(&format!(
            r#"
            SELECT {JUGADOR_COLUMNS}
            FROM jugador
            WHERE equipo_id = ? AND activo = 1
            ORDER BY apellidos, nombres
            "#
        ))
        .bind(equipo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jugadores)
    }

    /// Every jugador of a team regardless of active state.
    pub async fn find_por_equipo(&self, equipo_id: i64) -> Result<Vec<Jugador>, sqlx::Error> {
        let jugadores = sqlx::query_as::<_, Jugador>(&format!(
            r#"
            SELECT {JUGADOR_COLUMNS}
            FROM jugador
            WHERE equipo_id = ?
            ORDER BY apellidos, nombres
            "#
        ))
        .bind(equipo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(jugadores)
    }

    /// Duplicate-dorsal check within a team, optionally excluding one jugador
    /// (the record being updated).
    pub async fn exists_dorsal_en_equipo(
        &self,
        equipo_id: i64,
        dorsal: i16,
        exclude_id: Option<i64>,
    ) -> Result<bool, sqlx::Error> {
        let exists = match exclude_id {
            Some(id) => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS (
                        SELECT 1 FROM jugador
                        WHERE equipo_id = ? AND dorsal = ? AND jugador_id != ?
                    )
                    "#,
                )
                .bind(equipo_id)
                .bind(dorsal)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    "SELECT EXISTS (SELECT 1 FROM jugador WHERE equipo_id = ? AND dorsal = ?)",
                )
                .bind(equipo_id)
                .bind(dorsal)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(exists)
    }

    /// Full-field overwrite.
    pub async fn update(
        &self,
        id: i64,
        input: JugadorInput,
    ) -> Result<Option<Jugador>, sqlx::Error> {
        let jugador = sqlx::query_as::<_, Jugador>(&format!(
            r#"
            UPDATE jugador
            SET equipo_id = ?, nombres = ?, apellidos = ?, dorsal = ?, posicion = ?,
                estatura_cm = ?, edad = ?, nacionalidad = ?, activo = ?
            WHERE jugador_id = ?
            RETURNING {JUGADOR_COLUMNS}
            "#
        ))
        .bind(input.equipo_id)
        .bind(input.nombres)
        .bind(input.apellidos)
        .bind(input.dorsal)
        .bind(input.posicion)
        .bind(input.estatura_cm)
        .bind(input.edad)
        .bind(input.nacionalidad)
        .bind(input.activo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(jugador)
    }

    pub async fn set_activo(&self, id: i64, activo: bool) -> Result<Option<Jugador>, sqlx::Error> {
        let jugador = sqlx::query_as::<_, Jugador>(&format!(
            r#"
            UPDATE jugador
            SET activo = ?
            WHERE jugador_id = ?
            RETURNING {JUGADOR_COLUMNS}
            "#
        ))
        .bind(activo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(jugador)
    }

    /// Unconditional delete. A foreign-key rejection (the jugador appears in
    /// partido_jugador or falta) propagates as a database error for the
    /// service layer to classify.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jugador WHERE jugador_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Read-only projection of the jugadores linked to a partido, optionally
    /// filtered to one equipo.
    pub async fn find_por_partido(
        &self,
        partido_id: i64,
        equipo_id: Option<i64>,
    ) -> Result<Vec<JugadorMiniRow>, sqlx::Error> {
        let filas = match equipo_id {
            Some(equipo_id) => {
                sqlx::query_as::<_, JugadorMiniRow>(
                    r#"
                    SELECT j.jugador_id AS id, j.nombres, j.apellidos, j.dorsal,
                           j.posicion, pj.es_titular, j.activo
                    FROM jugador j
                    INNER JOIN partido_jugador pj ON j.jugador_id = pj.jugador_id
                    WHERE pj.partido_id = ? AND j.equipo_id = ?
                    ORDER BY j.apellidos, j.nombres
                    "#,
                )
                .bind(partido_id)
                .bind(equipo_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, JugadorMiniRow>(
                    r#"
                    SELECT j.jugador_id AS id, j.nombres, j.apellidos, j.dorsal,
                           j.posicion, pj.es_titular, j.activo
                    FROM jugador j
                    INNER JOIN partido_jugador pj ON j.jugador_id = pj.jugador_id
                    WHERE pj.partido_id = ?
                    ORDER BY j.apellidos, j.nombres
                    "#,
                )
                .bind(partido_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(filas)
    }
}
