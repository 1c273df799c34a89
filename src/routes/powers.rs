use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::power::{PowerForm, PowerUpdateForm},
    services::PowerService,
    AppState,
};

use super::{parse_form, require_fields};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(get_powers))
            .route(web::post().to(create_new_power)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_power_by_id))
            .route(web::patch().to(update_power_by_id))
            .route(web::delete().to(delete_power_by_id)),
    );
}

fn power_not_found() -> AppError {
    AppError::NotFound("Power not found".to_string())
}

/// GET /powers
async fn get_powers(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let powers = PowerService::new(&state.db).get_all_powers().await?;

    if powers.is_empty() {
        return Err(AppError::NotFound(
            "No powers added yet. Please add one first.".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(powers))
}

/// POST /powers
async fn create_new_power(
    state: web::Data<AppState>,
    body: Option<web::Json<Value>>,
) -> AppResult<HttpResponse> {
    let form: PowerForm = parse_form(require_fields(body)?, AppError::Unprocessable)?;

    let power = PowerService::new(&state.db).insert_new_power(&form).await?;
    tracing::info!(power_id = power.id, "Created power");

    Ok(HttpResponse::Created().json(power))
}

/// GET /powers/{id}
async fn get_power_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let power = PowerService::new(&state.db)
        .get_power_by_id(path.into_inner())
        .await?
        .ok_or_else(power_not_found)?;

    Ok(HttpResponse::Ok().json(power))
}

/// PATCH /powers/{id} - Update name and/or description
///
/// The power is looked up first so a missing id is a 404 whatever the body.
/// Nothing is written unless every supplied field passes validation.
async fn update_power_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: Option<web::Json<Value>>,
) -> AppResult<HttpResponse> {
    let power_id = path.into_inner();
    let power_service = PowerService::new(&state.db);

    power_service
        .get_power_by_id(power_id)
        .await?
        .ok_or_else(power_not_found)?;

    let fields = require_fields(body)?;
    if let Some((key, _)) = fields.iter().find(|(_, value)| value.is_null()) {
        return Err(AppError::Validation(vec![format!("{} cannot be null", key)]));
    }
    let form: PowerUpdateForm = parse_form(fields, AppError::Validation)?;

    let power = power_service
        .update_power_by_id(power_id, &form)
        .await?
        .ok_or_else(power_not_found)?;
    tracing::info!(power_id, "Updated power");

    Ok(HttpResponse::Ok().json(power))
}

/// DELETE /powers/{id} - Delete a power and its hero_powers
async fn delete_power_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let power_id = path.into_inner();

    if !PowerService::new(&state.db).delete_power_by_id(power_id).await? {
        return Err(power_not_found());
    }
    tracing::info!(power_id, "Deleted power");

    Ok(HttpResponse::NoContent().finish())
}
