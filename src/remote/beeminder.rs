use super::GoalService;
use crate::config::Credentials;
use crate::core::data::{Datapoint, Goal};
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const BEEMINDER_API_BASE: &str = "https://www.beeminder.com/api/v1";

#[derive(Debug, Deserialize)]
struct GoalRecord {
    slug: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    safesum: Option<String>,
}

impl From<GoalRecord> for Goal {
    fn from(record: GoalRecord) -> Self {
        Goal {
            slug: record.slug,
            title: record.title.unwrap_or_default(),
            summary: record.safesum.unwrap_or_default(),
        }
    }
}

pub struct BeeminderClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl BeeminderClient {
    pub fn new(credentials: Credentials, base_url: Option<&str>, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent(concat!("beetimer/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?,
            base_url: base_url
                .unwrap_or(BEEMINDER_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            credentials,
        })
    }

    fn user_url(&self, path: &str) -> String {
        format!(
            "{}/users/{}/{}",
            self.base_url, self.credentials.username, path
        )
    }

    fn token_query(&self) -> [(&'static str, &str); 1] {
        [("auth_token", self.credentials.auth_token.as_str())]
    }

    async fn check(response: Response) -> AppResult<Response> {
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url().path(), "beeminder response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::RemoteRequestFailed {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl GoalService for BeeminderClient {
    async fn list_goals(&self) -> AppResult<Vec<Goal>> {
        let url = self.user_url("goals.json");
        debug!(%url, "listing goals");

        let response = self
            .client
            .get(&url)
            .query(&self.token_query())
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch goals: {}", e)))?;

        let records: Vec<GoalRecord> = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse goals response: {}", e)))?;

        Ok(records.into_iter().map(Goal::from).collect())
    }

    async fn get_goal(&self, slug: &str) -> AppResult<Option<Goal>> {
        let url = self.user_url(&format!("goals/{}.json", slug));
        debug!(%url, "fetching goal");

        let response = self
            .client
            .get(&url)
            .query(&self.token_query())
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to fetch goal {}: {}", slug, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let record: GoalRecord = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse goal response: {}", e)))?;

        Ok(Some(record.into()))
    }

    async fn create_datapoint(&self, datapoint: &Datapoint) -> AppResult<()> {
        let url = self.user_url(&format!("goals/{}/datapoints.json", datapoint.slug));
        debug!(%url, value = datapoint.value, "creating datapoint");

        let form = [
            ("value", datapoint.value.to_string()),
            ("timestamp", datapoint.timestamp.to_string()),
            ("comment", datapoint.comment.clone()),
        ];

        let response = self
            .client
            .post(&url)
            .query(&self.token_query())
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Failed to create datapoint: {}", e)))?;

        Self::check(response).await?;
        Ok(())
    }
}
