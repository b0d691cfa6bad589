use clap::Parser;

use beetimer::cli::Cli;
use beetimer::config::Config;
use beetimer::manager::Context;
use beetimer::utils::error::{AppResult, report_error};
use beetimer::utils::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    if let Err(err) = run(cli).await {
        tracing::debug!(?err, "command failed");
        report_error(&err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let dir = cli.config_dir.clone().unwrap_or_else(Config::default_dir);
    let mut ctx = Context::from_dir(&dir)?;
    cli.command.execute(&mut ctx).await
}
