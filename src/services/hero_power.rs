use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::hero_power::{HeroPower, HeroPowerForm};

pub struct HeroPowerService<'a> {
    db: &'a Database,
}

impl<'a> HeroPowerService<'a> {
    pub fn new(db: &'a Database) -> Self {
        HeroPowerService { db }
    }

    pub async fn get_hero_power_by_id(&self, id: i64) -> AppResult<Option<HeroPower>> {
        let hero_power = sqlx::query_as::<_, HeroPower>(
            r#"
            SELECT id, strength, hero_id, power_id
            FROM hero_powers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(hero_power)
    }

    /// Callers check that the hero and power exist. If either row vanishes
    /// before the insert, the foreign key rejects it as unprocessable.
    pub async fn insert_new_hero_power(&self, form_data: &HeroPowerForm) -> AppResult<HeroPower> {
        let result = sqlx::query(
            r#"
            INSERT INTO hero_powers (strength, hero_id, power_id)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&form_data.strength)
        .bind(form_data.hero_id)
        .bind(form_data.power_id)
        .execute(&self.db.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::Unprocessable(vec![format!(
                    "Hero {} or power {} does not exist",
                    form_data.hero_id, form_data.power_id
                )])
            }
            e => AppError::Database(e),
        })?;

        self.get_hero_power_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| AppError::Internal("Failed to create hero power".to_string()))
    }

    pub async fn delete_hero_power_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM hero_powers WHERE id = ?")
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
