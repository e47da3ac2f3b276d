use super::Result;
use crate::constants::CONTACTS_BASE_PATH;
use crate::data::{ContactPayloadWeb, ContactWeb, FromWeb, IntoWeb};
use crate::error::{ContactOperation, Error};
use contacts_api::data::{Contact, ContactPayload};
use contacts_api::service::ServiceContext;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post, put};

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contact",
    description = "Creates a new contact. Phone and email have to be unique.",
    request_body(description = "The contact to create", content = ContactPayloadWeb),
    responses(
        (status = 201, description = "The created contact", body = ContactWeb),
        (status = 400, description = "A required field is missing or invalid, or phone or email are already in use"),
        (status = 500, description = "Unexpected error")
    )
)]
#[post("/", data = "<contact_payload>")]
pub async fn create_contact(
    state: &State<ServiceContext>,
    contact_payload: Json<ContactPayloadWeb>,
) -> Result<status::Created<Json<ContactWeb>>> {
    let payload = ContactPayload::from_web(contact_payload.0);
    let contact = state
        .contact_service
        .create_contact(&payload)
        .await
        .map_err(|e| Error::contact(ContactOperation::Create, format!("data: {payload:?}"), e))?;

    let location = format!("{CONTACTS_BASE_PATH}/{}", contact.id);
    Ok(status::Created::new(location).body(Json(contact.into_web())))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contact",
    description = "Returns all contacts",
    responses(
        (status = 200, description = "All contacts", body = Vec<ContactWeb>),
        (status = 500, description = "Unexpected error")
    )
)]
#[get("/")]
pub async fn list_contacts(state: &State<ServiceContext>) -> Result<Json<Vec<ContactWeb>>> {
    let contacts: Vec<Contact> = state
        .contact_service
        .list_contacts()
        .await
        .map_err(|e| Error::contact(ContactOperation::List, "all", e))?;
    Ok(Json(contacts.into_iter().map(|c| c.into_web()).collect()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contact/{id}",
    description = "Replaces the fields of the contact with the given id. Phone and email are not checked for uniqueness.",
    params(
        ("id" = String, Path, description = "The id of the contact")
    ),
    request_body(description = "The new contact data", content = ContactPayloadWeb),
    responses(
        (status = 200, description = "The updated contact", body = ContactWeb),
        (status = 400, description = "A required field is missing or invalid"),
        (status = 404, description = "Contact not found"),
        (status = 500, description = "Unexpected error")
    )
)]
#[put("/<id>", data = "<contact_payload>")]
pub async fn update_contact(
    state: &State<ServiceContext>,
    id: &str,
    contact_payload: Json<ContactPayloadWeb>,
) -> Result<Json<ContactWeb>> {
    let payload = ContactPayload::from_web(contact_payload.0);
    let contact = state
        .contact_service
        .update_contact(id, &payload)
        .await
        .map_err(|e| {
            Error::contact(
                ContactOperation::Update,
                format!("id: {id}, data: {payload:?}"),
                e,
            )
        })?;
    Ok(Json(contact.into_web()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contact/{id}",
    description = "Permanently deletes the contact with the given id",
    params(
        ("id" = String, Path, description = "The id of the contact")
    ),
    responses(
        (status = 204, description = "The contact was deleted"),
        (status = 404, description = "Contact not found"),
        (status = 500, description = "Unexpected error")
    )
)]
#[delete("/<id>")]
pub async fn delete_contact(state: &State<ServiceContext>, id: &str) -> Result<status::NoContent> {
    state
        .contact_service
        .delete_contact(id)
        .await
        .map_err(|e| Error::contact(ContactOperation::Delete, format!("id: {id}"), e))?;
    Ok(status::NoContent)
}
