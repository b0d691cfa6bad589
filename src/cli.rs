use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::manager::{self, Context};
use crate::utils::error::AppResult;

#[derive(Parser)]
#[command(name = "beetimer")]
#[command(about = "Time work sessions and send them to Beeminder")]
#[command(version)]
pub struct Cli {
    #[arg(short = 'C', long, value_name = "DIR", help = "Directory holding config.json and timer files")]
    pub config_dir: Option<PathBuf>,

    #[arg(short, long, help = "Print debug logs to stderr")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, ctx: &mut Context) -> AppResult<()> {
        match self {
            Commands::Auth(args) => manager::handle_auth_command(ctx, &args).await,
            Commands::Config(args) => manager::handle_config_command(ctx, &args),
            Commands::Goals => manager::handle_goals_command(ctx).await,
            Commands::Start(args) => manager::handle_start_command(ctx, &args).await,
            Commands::Status(args) => manager::handle_status_command(ctx, &args),
            Commands::Stop(args) => manager::handle_stop_command(ctx, &args).await,
            Commands::Upload(args) => manager::handle_upload_command(ctx, &args).await,
            Commands::Delete(args) => manager::handle_delete_command(ctx, &args),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask for an auth token and save it in config
    Auth(AuthArgs),

    /// Show settings, or set them as "k:v,k2:v2"
    Config(ConfigArgs),

    /// List goals
    Goals,

    /// Start a timer for a goal
    Start(StartArgs),

    /// Show status for a goal
    Status(SlugArgs),

    /// Stop a timer for a goal
    Stop(StopArgs),

    /// Upload a goal's points
    Upload(SlugArgs),

    /// Delete a goal's timer
    Delete(SlugArgs),
}

#[derive(Args)]
pub struct AuthArgs {
    #[arg(help = "Beeminder username")]
    pub username: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[arg(help = "Settings to store, e.g. \"time:%H hours,comment:focus\"")]
    pub settings: Option<String>,
}

#[derive(Args)]
pub struct StartArgs {
    #[arg(help = "Goal slug")]
    pub slug: String,

    #[arg(short = 'F', long, help = "Time format; must mention 'hour' or 'minute' (defaults to config `time`)")]
    pub time_format: Option<String>,
}

#[derive(Args)]
pub struct StopArgs {
    #[arg(help = "Goal slug")]
    pub slug: String,

    #[arg(short, long, help = "Upload without asking")]
    pub force_upload: bool,
}

#[derive(Args)]
pub struct SlugArgs {
    #[arg(help = "Goal slug")]
    pub slug: String,
}
