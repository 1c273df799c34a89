use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::hero::{HeroDetailResponse, HeroForm},
    services::HeroService,
    AppState,
};

use super::{parse_form, require_fields};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(get_heroes))
            .route(web::post().to(create_new_hero)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_hero_by_id))
            .route(web::delete().to(delete_hero_by_id)),
    );
}

/// GET /heroes - All heroes, without their powers
async fn get_heroes(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let heroes = HeroService::new(&state.db).get_all_heroes().await?;

    if heroes.is_empty() {
        return Err(AppError::NotFound(
            "No heroes added yet. Please add one first.".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(heroes))
}

/// POST /heroes - Create a hero
async fn create_new_hero(
    state: web::Data<AppState>,
    body: Option<web::Json<Value>>,
) -> AppResult<HttpResponse> {
    let form: HeroForm = parse_form(require_fields(body)?, AppError::Unprocessable)?;

    let hero = HeroService::new(&state.db).insert_new_hero(&form).await?;
    tracing::info!(hero_id = hero.id, "Created hero");

    Ok(HttpResponse::Created().json(hero))
}

/// GET /heroes/{id} - Hero with its hero_powers and their powers
async fn get_hero_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let hero_id = path.into_inner();
    let hero_service = HeroService::new(&state.db);

    let hero = hero_service
        .get_hero_by_id(hero_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Hero not found".to_string()))?;

    let hero_powers = hero_service.get_hero_powers(hero.id).await?;

    Ok(HttpResponse::Ok().json(HeroDetailResponse::from_hero_and_powers(hero, hero_powers)))
}

/// DELETE /heroes/{id} - Delete a hero and its hero_powers
async fn delete_hero_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let hero_id = path.into_inner();

    if !HeroService::new(&state.db).delete_hero_by_id(hero_id).await? {
        return Err(AppError::NotFound("Hero not found".to_string()));
    }
    tracing::info!(hero_id, "Deleted hero");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support;
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_get_heroes_empty() {
        let app = test::init_service(test_support::app(test_support::state().await)).await;

        let req = test::TestRequest::get().uri("/heroes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error": "No heroes added yet. Please add one first." })
        );
    }

    #[actix_web::test]
    async fn test_get_heroes_omits_powers() {
        let state = test_support::state().await;
        test_support::seed(&state).await;
        let app = test::init_service(test_support::app(state)).await;

        let req = test::TestRequest::get().uri("/heroes").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel" },
                { "id": 2, "name": "Doreen Green", "super_name": "Squirrel Girl" }
            ])
        );
    }

    #[actix_web::test]
    async fn test_get_hero_by_id_nests_powers() {
        let state = test_support::state().await;
        test_support::seed(&state).await;
        let app = test::init_service(test_support::app(state)).await;

        let req = test::TestRequest::get().uri("/heroes/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["super_name"], "Ms. Marvel");
        assert_eq!(
            body["hero_powers"],
            json!([{
                "id": 1,
                "hero_id": 1,
                "power_id": 2,
                "strength": "Strong",
                "power": {
                    "id": 2,
                    "name": "flight",
                    "description": "gives the wielder the ability to fly through the skies at supersonic speed"
                }
            }])
        );
        assert!(body["hero_powers"][0].get("hero").is_none());
    }

    #[actix_web::test]
    async fn test_get_hero_without_powers() {
        let state = test_support::state().await;
        test_support::seed(&state).await;
        let app = test::init_service(test_support::app(state)).await;

        let req = test::TestRequest::get().uri("/heroes/2").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["hero_powers"], json!([]));
    }

    #[actix_web::test]
    async fn test_get_hero_not_found() {
        let app = test::init_service(test_support::app(test_support::state().await)).await;

        let req = test::TestRequest::get().uri("/heroes/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Hero not found" }));
    }

    #[actix_web::test]
    async fn test_create_hero() {
        let app = test::init_service(test_support::app(test_support::state().await)).await;

        let req = test::TestRequest::post()
            .uri("/heroes")
            .set_json(json!({ "name": "Gwen Stacy", "super_name": "Spider-Gwen" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "id": 1, "name": "Gwen Stacy", "super_name": "Spider-Gwen" })
        );
    }

    #[actix_web::test]
    async fn test_create_hero_blank_name() {
        let app = test::init_service(test_support::app(test_support::state().await)).await;

        let req = test::TestRequest::post()
            .uri("/heroes")
            .set_json(json!({ "name": "", "super_name": "Spider-Gwen" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "errors": ["validation errors"] }));
    }

    #[actix_web::test]
    async fn test_create_hero_without_body() {
        let app = test::init_service(test_support::app(test_support::state().await)).await;

        let req = test::TestRequest::post().uri("/heroes").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_hero() {
        let state = test_support::state().await;
        test_support::seed(&state).await;
        let app = test::init_service(test_support::app(state)).await;

        let req = test::TestRequest::delete().uri("/heroes/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/heroes/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/heroes/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
