use crate::{Error, Result};
use async_trait::async_trait;
use contacts_core::{Contact, ContactPayload};
use log::debug;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
use mockall::automock;

/// The path the contacts resource is mounted at on the API
pub const CONTACTS_PATH: &str = "/api/contact";

/// The transport for the contacts resource
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactsApi: Send + Sync {
    /// Fetches all contacts
    async fn list(&self) -> Result<Vec<Contact>>;

    /// Creates a contact and returns the stored record
    async fn create(&self, payload: &ContactPayload) -> Result<Contact>;

    /// Replaces the fields of the contact with the given id and returns the stored record
    async fn update(&self, id: &str, payload: &ContactPayload) -> Result<Contact>;

    /// Deletes the contact with the given id
    async fn delete(&self, id: &str) -> Result<()>;
}

/// The error body the API sends with every non-2xx response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct HttpContactsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContactsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}{CONTACTS_PATH}", self.base_url)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{id}", self.collection_url())
    }
}

/// Turns a non-2xx response into an [`Error::Api`], using the message of the error body if
/// there is one
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(api_error(status, &body))
}

fn api_error(status: StatusCode, body: &str) -> Error {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(error_body) => error_body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_owned(),
    };
    Error::Api {
        status: status.as_u16(),
        message,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl ContactsApi for HttpContactsApi {
    async fn list(&self) -> Result<Vec<Contact>> {
        let url = self.collection_url();
        debug!("GET {url}");
        let response = check_status(self.client.get(&url).send().await?).await?;
        decode(response).await
    }

    async fn create(&self, payload: &ContactPayload) -> Result<Contact> {
        let url = self.collection_url();
        debug!("POST {url}");
        let response = check_status(self.client.post(&url).json(payload).send().await?).await?;
        decode(response).await
    }

    async fn update(&self, id: &str, payload: &ContactPayload) -> Result<Contact> {
        let url = self.item_url(id);
        debug!("PUT {url}");
        let response = check_status(self.client.put(&url).json(payload).send().await?).await?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.item_url(id);
        debug!("DELETE {url}");
        check_status(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
