use super::NameResolver;
use crate::libs::messages::Message;
use crate::libs::user::{NameResponse, FALLBACK_NAME};
use crate::msg_error_anyhow;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::warn;

const NAME_URL: &str = "users";
const NAME_SUFFIX: &str = "name";

/// HTTP client of the users service.
///
/// Holds one `reqwest::Client` (and with it one connection pool) for the
/// lifetime of the task service. Every request carries the configured
/// timeout.
#[derive(Clone, Debug)]
pub struct UsersClient {
    client: Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Uses an already configured client, e.g. one shared with other callers.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the name without applying the fallback.
    ///
    /// A 404 from the users service maps to `Ok(None)`; every other non-success
    /// status is an error.
    pub async fn fetch_name(&self, user_id: i64) -> Result<Option<String>> {
        let url = format!("{}/{}/{}/{}", self.base_url, NAME_URL, user_id, NAME_SUFFIX);
        let res = self.client.get(url).send().await?;

        match res.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body: NameResponse = res.json().await?;
                Ok(Some(body.name))
            }
            status => Err(msg_error_anyhow!(Message::NameResolveStatus(user_id, status.as_u16()))),
        }
    }
}

#[async_trait]
impl NameResolver for UsersClient {
    async fn resolve(&self, user_id: i64) -> String {
        match self.fetch_name(user_id).await {
            Ok(Some(name)) if !name.trim().is_empty() => name,
            Ok(_) => FALLBACK_NAME.to_string(),
            Err(e) => {
                warn!(user_id, "{}", Message::NameResolveFailed(user_id, e.to_string()));
                FALLBACK_NAME.to_string()
            }
        }
    }
}
