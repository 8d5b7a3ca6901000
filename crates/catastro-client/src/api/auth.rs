//! Authentication endpoints
//!
//! Session handling is cookie-based: the backend sets and validates the
//! session cookie, and the transport forwards it automatically. This module
//! never touches tokens directly.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::envelope::ApiEnvelope;
use crate::api::users::Role;
use crate::error::Result;
use crate::http::ApiClient;

/// Login form payload
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The authenticated user as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    user: SessionUser,
}

/// Client for `/auth` endpoints
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST `/auth/login`. On success the backend sets the session cookie
    /// and returns the authenticated user.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionUser> {
        let body = json!({
            "email": credentials.email,
            "password": credentials.password,
        });
        let response = self.client.post("auth/login", &body).await?;
        let envelope: ApiEnvelope<LoginData> = response.json()?;
        Ok(envelope.require_data("auth/login")?.user)
    }

    /// POST `/auth/logout`, invalidating the session server-side
    pub async fn logout(&self) -> Result<()> {
        self.client.post("auth/logout", &json!({})).await?;
        Ok(())
    }

    /// GET `/auth/me`, the user bound to the current session cookie
    pub async fn me(&self) -> Result<SessionUser> {
        let response = self.client.get("auth/me").await?;
        let envelope: ApiEnvelope<LoginData> = response.json()?;
        Ok(envelope.require_data("auth/me")?.user)
    }
}
