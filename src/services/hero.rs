use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::hero::{Hero, HeroForm};
use crate::models::hero_power::{HeroPowerPowerRow, HeroPowerWithPower};

pub struct HeroService<'a> {
    db: &'a Database,
}

impl<'a> HeroService<'a> {
    pub fn new(db: &'a Database) -> Self {
        HeroService { db }
    }

    pub async fn get_all_heroes(&self) -> AppResult<Vec<Hero>> {
        let heroes = sqlx::query_as::<_, Hero>(
            r#"
            SELECT id, name, super_name
            FROM heroes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db.pool)
        .await?;

        Ok(heroes)
    }

    pub async fn get_hero_by_id(&self, id: i64) -> AppResult<Option<Hero>> {
        let hero = sqlx::query_as::<_, Hero>(
            r#"
            SELECT id, name, super_name
            FROM heroes
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(hero)
    }

    /// Hero powers of a hero, each joined with its power.
    pub async fn get_hero_powers(&self, hero_id: i64) -> AppResult<Vec<HeroPowerWithPower>> {
        let rows = sqlx::query_as::<_, HeroPowerPowerRow>(
            r#"
            SELECT hp.id, hp.strength, hp.hero_id, hp.power_id,
                   p.name AS power_name,
                   p.description AS power_description
            FROM hero_powers hp
            JOIN powers p ON p.id = hp.power_id
            WHERE hp.hero_id = ?
            ORDER BY hp.id
            "#,
        )
        .bind(hero_id)
        .fetch_all(&self.db.pool)
        .await?;

        Ok(rows.into_iter().map(HeroPowerWithPower::from).collect())
    }

    pub async fn insert_new_hero(&self, form_data: &HeroForm) -> AppResult<Hero> {
        let result = sqlx::query(
            r#"
            INSERT INTO heroes (name, super_name)
            VALUES (?, ?)
            "#,
        )
        .bind(&form_data.name)
        .bind(&form_data.super_name)
        .execute(&self.db.pool)
        .await?;

        self.get_hero_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| AppError::Internal("Failed to create hero".to_string()))
    }

    /// Returns `false` when no hero had that id.
    pub async fn delete_hero_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = ?")
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
