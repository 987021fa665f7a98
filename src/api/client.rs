use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::UserResource;
use crate::config::ApiConfig;
use crate::model::{User, UserId};

/// [`UserResource`] backed by a REST endpoint.
///
/// Only the update call checks the response status; create and list rely on
/// the body decoding as a user, delete accepts any response.
#[derive(Debug, Clone)]
pub struct HttpUserResource {
    client: Client,
    base_url: String,
}

impl HttpUserResource {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

#[async_trait]
impl UserResource for HttpUserResource {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.collection_url();
        tracing::debug!(%url, "GET users");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        read_json(&url, response).await
    }

    async fn create_user(&self, candidate: &User) -> Result<User, ApiError> {
        let url = self.collection_url();
        tracing::debug!(%url, id = candidate.id, "POST user");
        let response = self
            .client
            .post(&url)
            .json(candidate)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        read_json(&url, response).await
    }

    async fn update_user(&self, id: UserId, user: &User) -> Result<User, ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "PUT user");
        let response = self
            .client
            .put(&url)
            .json(user)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(status));
        }
        read_json(&url, response).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE user");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        tracing::debug!(%url, status = response.status().as_u16(), "DELETE answered");
        Ok(())
    }
}

fn transport(url: &str, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| transport(url, source))?;
    serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
