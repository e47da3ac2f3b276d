use super::Result;
use crate::{
    Error,
    constants::{DB_EMAIL, DB_PHONE, DB_TABLE},
    contact::ContactStoreApi,
};
use async_trait::async_trait;
use contacts_core::Contact;
use serde::{Deserialize, Serialize};
use surrealdb::{
    Surreal,
    engine::any::Any,
    sql::{Datetime, Thing},
};

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = "contact";

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    async fn exists_with(&self, field: &'static str, value: &str) -> Result<bool> {
        let query = format!("SELECT * FROM type::table($table) WHERE {field} = ${field} LIMIT 1");
        let result: Vec<ContactDb> = self
            .db
            .query(query)
            .bind((DB_TABLE, Self::TABLE))
            .bind((field, value.to_owned()))
            .await?
            .take(0)?;
        Ok(!result.is_empty())
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        let result: Vec<ContactDb> = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY created_at ASC")
            .bind((DB_TABLE, Self::TABLE))
            .await?
            .take(0)?;
        Ok(result.into_iter().map(|c| c.into()).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let result: Option<ContactDb> = self.db.select((Self::TABLE, id)).await?;
        Ok(result.map(|c| c.into()))
    }

    async fn exists_with_phone(&self, phone: &str) -> Result<bool> {
        self.exists_with(DB_PHONE, phone).await
    }

    async fn exists_with_email(&self, email: &str) -> Result<bool> {
        self.exists_with(DB_EMAIL, email).await
    }

    async fn insert(&self, data: &Contact) -> Result<()> {
        let entity: ContactDb = data.into();
        let created: Option<ContactDb> = self
            .db
            .create((Self::TABLE, data.id.to_owned()))
            .content(entity)
            .await?;
        match created {
            Some(_) => Ok(()),
            None => Err(Error::InsertFailed(format!("contact {}", data.id))),
        }
    }

    async fn update(&self, id: &str, data: &Contact) -> Result<()> {
        let entity: ContactDb = data.into();
        let updated: Option<ContactDb> = self
            .db
            .update((Self::TABLE, id.to_owned()))
            .content(entity)
            .await?;
        match updated {
            Some(_) => Ok(()),
            None => Err(Error::NoSuchEntity("contact".to_string(), id.to_owned())),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let deleted: Option<ContactDb> = self.db.delete((Self::TABLE, id.to_owned())).await?;
        match deleted {
            Some(_) => Ok(()),
            None => Err(Error::NoSuchEntity("contact".to_string(), id.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

impl From<ContactDb> for Contact {
    fn from(value: ContactDb) -> Self {
        Self {
            id: value.id.map(|t| t.id.to_raw()).unwrap_or_default(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            company: value.company,
            job_title: value.job_title,
            created_at: value.created_at.0,
            updated_at: value.updated_at.0,
        }
    }
}

impl From<&Contact> for ContactDb {
    fn from(value: &Contact) -> Self {
        Self {
            id: None,
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            email: value.email.clone(),
            phone: value.phone.clone(),
            company: value.company.clone(),
            job_title: value.job_title.clone(),
            created_at: Datetime::from(value.created_at),
            updated_at: Datetime::from(value.updated_at),
        }
    }
}
