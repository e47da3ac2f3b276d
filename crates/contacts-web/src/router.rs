use crate::api_docs::ApiDocs;
use crate::config::Config;
use crate::constants::{CONTACTS_BASE_PATH, MAX_JSON_SIZE_BYTES};
use crate::handlers;
use contacts_api::service::ServiceContext;
use log::info;
use rocket::data::ByteUnit;
use rocket::figment::Figment;
use rocket::http::Method;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use serde::Serialize;
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    error: &'static str,
    message: String,
    code: u16,
}

impl ErrorResponse {
    pub fn new(error: &'static str, message: String, code: u16) -> Self {
        Self {
            error,
            message,
            code,
        }
    }

    pub fn to_json_string(&self) -> String {
        json!({ "error": self.error, "message": self.message }).to_string()
    }
}

pub fn rocket_main(conf: Config, context: ServiceContext) -> Rocket<Build> {
    let config = Figment::from(rocket::Config::default())
        .merge(("limits.json", ByteUnit::Byte(MAX_JSON_SIZE_BYTES)))
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_headers(AllowedHeaders::all())
        .allowed_methods(
            vec![
                Method::Get,
                Method::Post,
                Method::Put,
                Method::Delete,
                Method::Options,
            ]
            .into_iter()
            .map(From::from)
            .collect(),
        )
        .allow_credentials(true)
        .to_cors()
        .expect("Cors setup failed");

    let rocket = rocket::custom(config)
        .attach(cors.clone())
        // catchers for CORS and API errors
        .mount("/api/", rocket_cors::catch_all_options_routes())
        .register(
            "/api/",
            catchers![not_found, bad_request, unprocessable_entity, internal_error],
        )
        .manage(context)
        .manage(cors)
        .mount("/", routes![handlers::status])
        .mount(
            CONTACTS_BASE_PATH,
            routes![
                handlers::contacts::create_contact,
                handlers::contacts::list_contacts,
                handlers::contacts::update_contact,
                handlers::contacts::delete_contact,
            ],
        )
        .mount(
            "/",
            SwaggerUi::new("/api/swagger-ui/<_..>")
                .url("/api/api-docs/openapi.json", ApiDocs::openapi()),
        );

    info!("HTTP Server Listening on {}", conf.http_listen_url());

    rocket
}

#[catch(404)]
fn not_found(req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "not_found",
        format!("We couldn't find the requested path '{}'", req.uri()),
        404,
    ))
}

#[catch(400)]
fn bad_request(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "bad_request",
        String::from("The request could not be understood"),
        400,
    ))
}

#[catch(422)]
fn unprocessable_entity(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "bad_request",
        String::from("The request body has an invalid shape"),
        422,
    ))
}

#[catch(500)]
fn internal_error(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "internal_error",
        String::from("Something went wrong"),
        500,
    ))
}
