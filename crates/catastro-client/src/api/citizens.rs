//! Taxpayer record endpoints
//!
//! CRUD over `/citizens`, the Ecuadorian taxpayer registry the application
//! administers. Listing supports paging and free-text search via query
//! parameters on the shared pipeline.

use serde::{Deserialize, Serialize};

use crate::api::envelope::ApiEnvelope;
use crate::error::Result;
use crate::http::{ApiClient, Method, RequestOptions};

/// Taxpayer classification used by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxpayerType {
    /// Natural person (cédula holder)
    Natural,
    /// Registered company (RUC holder)
    Sociedad,
}

/// A taxpayer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citizen {
    pub id: u64,
    /// National identity number
    pub cedula: String,
    /// Taxpayer registry number, when the person or company has one
    #[serde(default)]
    pub ruc: Option<String>,
    pub names: String,
    pub surnames: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub taxpayer_type: TaxpayerType,
}

/// Payload for registering a taxpayer
#[derive(Debug, Clone, Serialize)]
pub struct NewCitizen {
    pub cedula: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<String>,
    pub names: String,
    pub surnames: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub taxpayer_type: TaxpayerType,
}

/// Partial update; `None` fields are left unchanged by the backend
#[derive(Debug, Clone, Default, Serialize)]
pub struct CitizenUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surnames: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Paging and search parameters for listing taxpayers
#[derive(Debug, Clone, Default)]
pub struct CitizenQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Free-text search over cédula, RUC, and names
    pub search: Option<String>,
}

impl CitizenQuery {
    fn into_options(self) -> RequestOptions {
        let mut options = RequestOptions::new();
        if let Some(page) = self.page {
            options = options.query("page", page.to_string());
        }
        if let Some(per_page) = self.per_page {
            options = options.query("per_page", per_page.to_string());
        }
        if let Some(search) = self.search {
            options = options.query("search", search);
        }
        options
    }
}

/// Client for `/citizens` endpoints
#[derive(Debug, Clone)]
pub struct CitizensApi {
    client: ApiClient,
}

impl CitizensApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET `/citizens` with paging and search parameters
    pub async fn list(&self, query: CitizenQuery) -> Result<Vec<Citizen>> {
        let response = self
            .client
            .request(Method::GET, "citizens", None, query.into_options())
            .await?;
        let envelope: ApiEnvelope<Vec<Citizen>> = response.json()?;
        envelope.require_data("citizens")
    }

    /// GET `/citizens/{id}`
    pub async fn get(&self, id: u64) -> Result<Citizen> {
        let response = self.client.get(&format!("citizens/{}", id)).await?;
        let envelope: ApiEnvelope<Citizen> = response.json()?;
        envelope.require_data("citizens/{id}")
    }

    /// POST `/citizens`
    pub async fn create(&self, citizen: &NewCitizen) -> Result<Citizen> {
        let body = serde_json::to_value(citizen)
            .map_err(|e| crate::Error::configuration("failed to serialize taxpayer payload", e))?;
        let response = self.client.post("citizens", &body).await?;
        let envelope: ApiEnvelope<Citizen> = response.json()?;
        envelope.require_data("citizens")
    }

    /// PUT `/citizens/{id}`
    pub async fn update(&self, id: u64, update: &CitizenUpdate) -> Result<Citizen> {
        let body = serde_json::to_value(update)
            .map_err(|e| crate::Error::configuration("failed to serialize taxpayer update", e))?;
        let response = self.client.put(&format!("citizens/{}", id), &body).await?;
        let envelope: ApiEnvelope<Citizen> = response.json()?;
        envelope.require_data("citizens/{id}")
    }

    /// DELETE `/citizens/{id}`
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("citizens/{}", id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_citizen_deserializes_minimal_record() {
        let citizen: Citizen = serde_json::from_value(json!({
            "id": 10,
            "cedula": "1712345678",
            "names": "María José",
            "surnames": "Andrade Vera",
            "taxpayer_type": "natural"
        }))
        .unwrap();

        assert_eq!(citizen.cedula, "1712345678");
        assert!(citizen.ruc.is_none());
        assert_eq!(citizen.taxpayer_type, TaxpayerType::Natural);
    }

    #[test]
    fn test_query_builds_only_set_parameters() {
        let options = CitizenQuery {
            page: Some(2),
            per_page: None,
            search: Some("17123".to_string()),
        }
        .into_options();

        assert_eq!(
            options.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("search".to_string(), "17123".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_serializes_sparse_payload() {
        let update = CitizenUpdate {
            email: Some("maria@example.ec".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"email": "maria@example.ec"})
        );
    }
}
