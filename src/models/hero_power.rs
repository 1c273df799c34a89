use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use super::{hero::Hero, power::Power};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl FromStr for Strength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|strength| strength.as_str() == s)
            .ok_or_else(|| format!("Unknown strength: {}", s))
    }
}

fn validate_strength(strength: &str) -> Result<(), ValidationError> {
    strength.parse::<Strength>().map(|_| ()).map_err(|_| {
        ValidationError::new("strength").with_message(Cow::Borrowed(
            "HeroPower strength must be either: 'Strong', 'Weak' or 'Average'.",
        ))
    })
}

/// Row of the `hero_powers` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct HeroPower {
    pub id: i64,
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct HeroPowerForm {
    #[validate(custom(function = "validate_strength"))]
    pub strength: String,
    #[validate(range(min = 1, message = "HeroPower hero_id must be a valid integer."))]
    pub hero_id: i64,
    #[validate(range(min = 1, message = "HeroPower power_id must be a valid integer."))]
    pub power_id: i64,
}

/// A hero_power joined with its power, as listed under a hero.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeroPowerWithPower {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: String,
    pub power: Power,
}

#[derive(Debug, FromRow)]
pub struct HeroPowerPowerRow {
    pub id: i64,
    pub strength: String,
    pub hero_id: i64,
    pub power_id: i64,
    pub power_name: String,
    pub power_description: String,
}

impl From<HeroPowerPowerRow> for HeroPowerWithPower {
    fn from(row: HeroPowerPowerRow) -> Self {
        HeroPowerWithPower {
            id: row.id,
            hero_id: row.hero_id,
            power_id: row.power_id,
            strength: row.strength,
            power: Power {
                id: row.power_id,
                name: row.power_name,
                description: row.power_description,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeroPowerResponse {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: String,
    pub hero: Hero,
    pub power: Power,
}

impl HeroPowerResponse {
    pub fn new(hero_power: HeroPower, hero: Hero, power: Power) -> Self {
        HeroPowerResponse {
            id: hero_power.id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
            hero,
            power,
        }
    }
}
