//! User management endpoints
//!
//! CRUD over `/users` plus the role catalog. All calls go through the shared
//! pipeline, so failures arrive already classified.

use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiEnvelope;
use crate::error::Result;
use crate::http::ApiClient;

/// Application role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operator,
    Viewer,
}

/// A user account as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub active: bool,
}

/// Payload for creating an account
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Partial update; `None` fields are left unchanged by the backend
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Client for `/users` endpoints
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET `/users`
    pub async fn list(&self) -> Result<Vec<UserRecord>> {
        let response = self.client.get("users").await?;
        let envelope: ApiEnvelope<Vec<UserRecord>> = response.json()?;
        envelope.require_data("users")
    }

    /// GET `/users/{id}`
    pub async fn get(&self, id: u64) -> Result<UserRecord> {
        let response = self.client.get(&format!("users/{}", id)).await?;
        let envelope: ApiEnvelope<UserRecord> = response.json()?;
        envelope.require_data("users/{id}")
    }

    /// POST `/users`
    pub async fn create(&self, user: &NewUser) -> Result<UserRecord> {
        let body = serde_json::to_value(user)
            .map_err(|e| crate::Error::configuration("failed to serialize user payload", e))?;
        let response = self.client.post("users", &body).await?;
        let envelope: ApiEnvelope<UserRecord> = response.json()?;
        envelope.require_data("users")
    }

    /// PUT `/users/{id}`
    pub async fn update(&self, id: u64, update: &UserUpdate) -> Result<UserRecord> {
        let body = serde_json::to_value(update)
            .map_err(|e| crate::Error::configuration("failed to serialize user update", e))?;
        let response = self.client.put(&format!("users/{}", id), &body).await?;
        let envelope: ApiEnvelope<UserRecord> = response.json()?;
        envelope.require_data("users/{id}")
    }

    /// DELETE `/users/{id}`
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("users/{}", id)).await?;
        Ok(())
    }

    /// GET `/roles`, the assignable role catalog
    pub async fn roles(&self) -> Result<Vec<Role>> {
        let response = self.client.get("roles").await?;
        let envelope: ApiEnvelope<Vec<Role>> = response.json()?;
        envelope.require_data("roles")
    }
}
