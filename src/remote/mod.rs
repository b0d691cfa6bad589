pub mod beeminder;

use crate::config::{Config, Credentials};
use crate::core::data::{Datapoint, Goal};
use crate::utils::error::AppResult;
use async_trait::async_trait;

/// The goal-tracking service as seen by this tool: read goals, append datapoints.
#[async_trait]
pub trait GoalService: Send + Sync {
    async fn list_goals(&self) -> AppResult<Vec<Goal>>;
    async fn get_goal(&self, slug: &str) -> AppResult<Option<Goal>>;
    async fn create_datapoint(&self, datapoint: &Datapoint) -> AppResult<()>;
}

/// Builds a service client for a set of credentials. `auth` needs this to try
/// a token before it is saved.
pub trait Connector: Send + Sync {
    fn connect(&self, credentials: &Credentials, config: &Config) -> AppResult<Box<dyn GoalService>>;
}

pub struct BeeminderConnector;

impl Connector for BeeminderConnector {
    fn connect(&self, credentials: &Credentials, config: &Config) -> AppResult<Box<dyn GoalService>> {
        let client = beeminder::BeeminderClient::new(
            credentials.clone(),
            config.base_url(),
            config.timeout()?,
        )?;
        Ok(Box::new(client))
    }
}
