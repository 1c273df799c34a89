pub mod hero_powers;
pub mod heroes;
pub mod powers;

use actix_web::{web, HttpResponse};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{validation_messages, AppError, AppResult};

const NO_FIELDS: &str = "No update field provided.";
const ROUTE_NOT_FOUND: &str = "Not Found: The requested resource does not exist.";

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(64 * 1024)
            .content_type_required(false),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|_, _| AppError::NotFound(ROUTE_NOT_FOUND.to_string()).into()),
    )
    .route("/", web::get().to(index))
    .service(web::scope("/heroes").configure(heroes::create_routes))
    .service(web::scope("/powers").configure(powers::create_routes))
    .service(web::scope("/hero_powers").configure(hero_powers::create_routes))
    .default_service(web::to(not_found));
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(
        r#"
        <h1>Home of Super Heroes</h1>
        <h3>This is the root path of super heroes app.</h3>
    "#,
    )
}

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound(ROUTE_NOT_FOUND.to_string()))
}

/// Unwraps an optional JSON body into a non-empty object. Missing,
/// malformed, non-object and `{}` bodies are all rejected the same way.
fn require_fields(body: Option<web::Json<Value>>) -> AppResult<Map<String, Value>> {
    match body.map(web::Json::into_inner) {
        Some(Value::Object(fields)) if !fields.is_empty() => Ok(fields),
        _ => Err(AppError::BadRequest(NO_FIELDS.to_string())),
    }
}

/// Deserializes and validates a form. Every failure is wrapped by `reject`,
/// which picks the status (400 for updates, 422 for creates).
fn parse_form<T>(fields: Map<String, Value>, reject: fn(Vec<String>) -> AppError) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let form: T = serde_json::from_value(Value::Object(fields)).map_err(|e| reject(vec![e.to_string()]))?;
    form.validate()
        .map_err(|errors| reject(validation_messages(&errors)))?;
    Ok(form)
}

#[cfg(test)]
pub(crate) mod test_support {
    use actix_web::{web, App};

    use crate::db::Database;
    use crate::AppState;

    pub async fn state() -> web::Data<AppState> {
        let db = Database::in_memory().await.expect("in-memory database");
        web::Data::new(AppState::new(db))
    }

    pub async fn exec(state: &web::Data<AppState>, sql: &str) {
        sqlx::query(sql)
            .execute(state.db.pool())
            .await
            .expect("seed statement");
    }

    /// Two heroes, two powers, one hero_power linking hero 1 to power 2.
    pub async fn seed(state: &web::Data<AppState>) {
        exec(state, "INSERT INTO heroes (name, super_name) VALUES ('Kamala Khan', 'Ms. Marvel')").await;
        exec(state, "INSERT INTO heroes (name, super_name) VALUES ('Doreen Green', 'Squirrel Girl')").await;
        exec(
            state,
            "INSERT INTO powers (name, description) VALUES ('super strength', 'gives the wielder super-human strengths')",
        )
        .await;
        exec(
            state,
            "INSERT INTO powers (name, description) VALUES ('flight', 'gives the wielder the ability to fly through the skies at supersonic speed')",
        )
        .await;
        exec(state, "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES ('Strong', 1, 2)").await;
    }

    pub fn app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(state).configure(super::create_routes)
    }
}
