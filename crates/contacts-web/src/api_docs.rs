use crate::data::{ContactPayloadWeb, ContactWeb, StatusResponse};
use crate::handlers;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Contacts API", description = "Create, list, edit and delete contacts"),
    paths(
        handlers::status,
        handlers::contacts::create_contact,
        handlers::contacts::list_contacts,
        handlers::contacts::update_contact,
        handlers::contacts::delete_contact,
    ),
    components(schemas(ContactWeb, ContactPayloadWeb, StatusResponse))
)]
pub struct ApiDocs;
