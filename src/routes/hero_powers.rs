use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::hero_power::{HeroPowerForm, HeroPowerResponse},
    services::{HeroPowerService, HeroService, PowerService},
    AppState,
};

use super::{parse_form, require_fields};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_new_hero_power)))
        .service(web::resource("/{id}").route(web::delete().to(delete_hero_power_by_id)));
}

/// POST /hero_powers - Link a hero to a power
async fn create_new_hero_power(
    state: web::Data<AppState>,
    body: Option<web::Json<Value>>,
) -> AppResult<HttpResponse> {
    let form: HeroPowerForm = parse_form(require_fields(body)?, AppError::Unprocessable)?;

    let hero = HeroService::new(&state.db)
        .get_hero_by_id(form.hero_id)
        .await?
        .ok_or_else(|| {
            AppError::Unprocessable(vec![format!("Hero {} does not exist", form.hero_id)])
        })?;
    let power = PowerService::new(&state.db)
        .get_power_by_id(form.power_id)
        .await?
        .ok_or_else(|| {
            AppError::Unprocessable(vec![format!("Power {} does not exist", form.power_id)])
        })?;

    let hero_power = HeroPowerService::new(&state.db)
        .insert_new_hero_power(&form)
        .await?;
    tracing::info!(
        hero_power_id = hero_power.id,
        hero_id = hero.id,
        power_id = power.id,
        "Created hero power"
    );

    Ok(HttpResponse::Created().json(HeroPowerResponse::new(hero_power, hero, power)))
}

/// DELETE /hero_powers/{id}
async fn delete_hero_power_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let hero_power_id = path.into_inner();

    if !HeroPowerService::new(&state.db)
        .delete_hero_power_by_id(hero_power_id)
        .await?
    {
        return Err(AppError::NotFound("HeroPower not found".to_string()));
    }
    tracing::info!(hero_power_id, "Deleted hero power");

    Ok(HttpResponse::NoContent().finish())
}
