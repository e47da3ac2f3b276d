use crate::data::StatusResponse;
use crate::error::Error;
use crate::router::ErrorResponse;
use contacts_api::service;
use log::{error, warn};
use rocket::http::{ContentType, Status};
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Response, get};
use std::io::Cursor;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod contacts;

#[utoipa::path(
    tag = "General",
    path = "/",
    description = "Checks whether the API is up",
    responses(
        (status = 200, description = "The API is up", body = StatusResponse)
    )
)]
#[get("/")]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: String::from("API is working fine"),
    })
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            Error::Contact {
                operation,
                context,
                source,
            } => match source {
                service::Error::Validation(msg) => {
                    warn!("Validation failed {operation} ({context}): {msg}");
                    build_json_response(Status::BadRequest, "validation_error", msg)
                }
                service::Error::Duplicate(field) => {
                    let msg = service::Error::Duplicate(field).to_string();
                    warn!("Duplicate {operation} ({context}): {msg}");
                    build_json_response(Status::BadRequest, "duplicate_error", msg)
                }
                service::Error::NotFound => {
                    warn!("Not found {operation} ({context})");
                    build_json_response(
                        Status::NotFound,
                        "not_found",
                        String::from("Contact not found"),
                    )
                }
                // The caller only learns that something went wrong on our end, the details are
                // logged
                service::Error::Persistence(e) => {
                    error!("Error {operation} ({context}): {e}");
                    build_json_response(
                        Status::InternalServerError,
                        "internal_error",
                        operation.failure_message().to_owned(),
                    )
                }
            },
        }
    }
}

fn build_json_response<'o>(
    status: Status,
    error: &'static str,
    msg: String,
) -> rocket::response::Result<'o> {
    let body = ErrorResponse::new(error, msg, status.code).to_json_string();
    Response::build()
        .status(status)
        .header(ContentType::JSON)
        .sized_body(body.len(), Cursor::new(body))
        .ok()
}
