// Command handlers
pub mod config;   // auth, config
pub mod goals;    // goals listing
pub mod timer;    // start, status, stop, delete
pub mod upload;   // upload and the shared datapoint push

pub use config::{handle_auth_command, handle_config_command};
pub use goals::handle_goals_command;
pub use timer::{handle_delete_command, handle_start_command, handle_status_command, handle_stop_command};
pub use upload::handle_upload_command;

use std::path::Path;

use crate::config::Config;
use crate::core::operations::TimerOperations;
use crate::core::traits::Prompter;
use crate::remote::{BeeminderConnector, Connector, GoalService};
use crate::storage::FileTimerStore;
use crate::utils::clock::SystemClock;
use crate::utils::error::AppResult;
use crate::utils::interactive::TerminalPrompter;

/// Everything a command needs, loaded once per invocation.
pub struct Context {
    pub config: Config,
    pub timers: TimerOperations,
    pub prompter: Box<dyn Prompter>,
    pub connector: Box<dyn Connector>,
}

impl Context {
    /// Production wiring rooted at `dir`: files on disk, the terminal, the real API.
    pub fn from_dir(dir: &Path) -> AppResult<Self> {
        let config = Config::load_from_dir(dir)?;
        Ok(Self {
            config,
            timers: TimerOperations::new(Box::new(FileTimerStore::new(dir)), Box::new(SystemClock)),
            prompter: Box::new(TerminalPrompter),
            connector: Box::new(BeeminderConnector),
        })
    }

    /// Client for the stored credentials.
    pub fn remote(&self) -> AppResult<Box<dyn GoalService>> {
        let credentials = self.config.credentials()?;
        self.connector.connect(&credentials, &self.config)
    }
}
