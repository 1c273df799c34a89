use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::power::{Power, PowerForm, PowerUpdateForm};

pub struct PowerService<'a> {
    db: &'a Database,
}

impl<'a> PowerService<'a> {
    pub fn new(db: &'a Database) -> Self {
        PowerService { db }
    }

    pub async fn get_all_powers(&self) -> AppResult<Vec<Power>> {
        let powers = sqlx::query_as::<_, Power>(
            r#"
            SELECT id, name, description
            FROM powers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db.pool)
        .await?;

        Ok(powers)
    }

    pub async fn get_power_by_id(&self, id: i64) -> AppResult<Option<Power>> {
        let power = sqlx::query_as::<_, Power>(
            r#"
            SELECT id, name, description
            FROM powers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(power)
    }

    pub async fn insert_new_power(&self, form_data: &PowerForm) -> AppResult<Power> {
        let result = sqlx::query(
            r#"
            INSERT INTO powers (name, description)
            VALUES (?, ?)
            "#,
        )
        .bind(&form_data.name)
        .bind(&form_data.description)
        .execute(&self.db.pool)
        .await?;

        self.get_power_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| AppError::Internal("Failed to create power".to_string()))
    }

    /// Applies only the fields present in the form. `None` when the power
    /// does not exist.
    pub async fn update_power_by_id(
        &self,
        id: i64,
        form_data: &PowerUpdateForm,
    ) -> AppResult<Option<Power>> {
        let result = sqlx::query(
            r#"
            UPDATE powers
            SET name = COALESCE(?, name),
                description = COALESCE(?, description)
            WHERE id = ?
            "#,
        )
        .bind(&form_data.name)
        .bind(&form_data.description)
        .bind(id)
        .execute(&self.db.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_power_by_id(id).await
    }

    pub async fn delete_power_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM powers WHERE id = ?")
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
