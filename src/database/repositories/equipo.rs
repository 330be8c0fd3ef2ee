use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Equipo, EquipoInput};

#[derive(Clone)]
pub struct EquipoRepository {
    pool: SqlitePool,
}

impl EquipoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: EquipoInput) -> Result<Equipo, sqlx::Error> {
        let equipo = sqlx::query_as::<_, Equipo>(
            r#"
            INSERT INTO equipo (nombre, ciudad, abreviatura, activo, fecha_creacion)
            VALUES (?, ?, ?, ?, ?)
            RETURNING equipo_id AS id, nombre, ciudad, abreviatura, activo, fecha_creacion, logo
            "#,
        )
        .bind(input.nombre)
        .bind(input.ciudad)
        .bind(input.abreviatura)
        .bind(input.activo)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(equipo)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Equipo>, sqlx::Error> {
        let equipo = sqlx::query_as::<_, Equipo>(
            r#"
            SELECT equipo_id AS id, nombre, ciudad, abreviatura, activo, fecha_creacion, logo
            FROM equipo
            WHERE equipo_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(equipo)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM equipo WHERE equipo_id = ?)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn find_all(&self) -> Result<Vec<Equipo>, sqlx::Error> {
        let equipos = sqlx::query_as::<_, Equipo>(
            r#"
            SELECT equipo_id AS id, nombre, ciudad, abreviatura, activo, fecha_creacion, logo
            FROM equipo
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(equipos)
    }

    pub async fn find_activos(&self) -> Result<Vec<Equipo>, sqlx::Error> {
        let equipos = sqlx::query_as::<_, Equipo>(
            r#"
            SELECT equipo_id AS id, nombre, ciudad, abreviatura, activo, fecha_creacion, logo
            FROM equipo
            WHERE activo = 1
            ORDER BY nombre
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(equipos)
    }

    /// Case-insensitive exact match on the trimmed name.
    pub async fn find_by_nombre(&self, nombre: &str) -> Result<Option<Equipo>, sqlx::Error> {
        let equipo = sqlx::query_as::<_, Equipo>(
            r#"
            SELECT equipo_id AS id, nombre, ciudad, abreviatura, activo, fecha_creacion, logo
            FROM equipo
            WHERE lower(trim(nombre)) = lower(trim(?))
            "#,
        )
        .bind(nombre)
        .fetch_optional(&self.pool)
        .await?;

        Ok(equipo)
    }

    pub async fn exists_by_nombre(&self, nombre: &str) -> Result<bool, sqlx::Error> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM equipo WHERE lower(trim(nombre)) = lower(trim(?))
            )
            "#,
        )
        .bind(nombre)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn exists_by_nombre_excluding(
        &self,
        nombre: &str,
        exclude_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM equipo
                WHERE lower(trim(nombre)) = lower(trim(?)) AND equipo_id != ?
            )
            "#,
        )
        .bind(nombre)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Overwrites nombre/ciudad/abreviatura/activo; fecha_creacion and logo
    /// are left untouched.
    pub async fn update(&self, id: i64, input: EquipoInput) -> Result<Option<Equipo>, sqlx::Error> {
        let equipo = sqlx::query_as::<_, Equipo>(
            r#"
            UPDATE equipo
            SET nombre = ?, ciudad = ?, abreviatura = ?, activo = ?
            WHERE equipo_id = ?
            RETURNING equipo_id AS id, nombre, ciudad, abreviatura, activo, fecha_creacion, logo
            "#,
        )
        .bind(input.nombre)
        .bind(input.ciudad)
        .bind(input.abreviatura)
        .bind(input.activo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(equipo)
    }

    pub async fn set_activo(&self, id: i64, activo: bool) -> Result<Option<Equipo>, sqlx::Error> {
        let equipo = sqlx::query_as::<_, Equipo>(
            r#"
            UPDATE equipo
            SET activo = ?
            WHERE equipo_id = ?
            RETURNING equipo_id AS id, nombre, ciudad, abreviatura, activo, fecha_creacion, logo
            "#,
        )
        .bind(activo)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(equipo)
    }

    /// Cascade delete: removes the team's jugadores and then the team itself
    /// inside a single transaction, so a crash between the two statements
    /// cannot leave jugadores orphaned from a deleted equipo.
    pub async fn delete_con_jugadores(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM jugador WHERE equipo_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM equipo WHERE equipo_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
