use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::hero_power::HeroPowerWithPower;

/// Row of the `heroes` table. Also the shape used in hero listings and when
/// a hero is embedded inside a hero_power.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct HeroForm {
    #[validate(length(min = 1, message = "A hero must have a name."))]
    pub name: String,
    #[validate(length(min = 1, message = "A hero must have a super_name."))]
    pub super_name: String,
}

#[derive(Debug, Serialize)]
pub struct HeroDetailResponse {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

impl HeroDetailResponse {
    pub fn from_hero_and_powers(hero: Hero, hero_powers: Vec<HeroPowerWithPower>) -> Self {
        HeroDetailResponse {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers,
        }
    }
}
