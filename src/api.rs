use crate::endpoints;
use crate::errors::ClientError;
use crate::models::{AnswerRecord, DeleteResult};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

#[derive(Clone)]
pub struct AdminApi {
    client: Client,
    base_url: String,
}

impl AdminApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Records one answer event. The response body is opaque to callers.
    pub async fn save_answer(&self, record: &AnswerRecord) -> Result<serde_json::Value, ClientError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, endpoints::SAVE_ANSWER))
            .json(record)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn delete_user_stats(&self, user_id: &str) -> Result<DeleteResult, ClientError> {
        self.post_delete(&endpoints::delete_user_path(user_id)).await
    }

    pub async fn delete_all_stats(&self) -> Result<DeleteResult, ClientError> {
        self.post_delete(endpoints::DELETE_ALL_STATS).await
    }

    // Deletion endpoints take no body but still expect the JSON content type.
    async fn post_delete(&self, path: &str) -> Result<DeleteResult, ClientError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::status(response.status()));
        }
        Ok(response.json().await?)
    }
}
