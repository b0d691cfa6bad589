// Account and settings commands

use tracing::info;

use crate::cli::{AuthArgs, ConfigArgs};
use crate::config::{Credentials, KEY_AUTH_TOKEN, KEY_USERNAME, parse_pairs};
use crate::manager::Context;
use crate::utils::error::{AppError, AppResult};
use crate::utils::{OutputStyle, print_info, print_success};

pub async fn handle_auth_command(ctx: &mut Context, args: &AuthArgs) -> AppResult<()> {
    let token = ctx
        .prompter
        .secret("API Token (will be stored in plaintext)")?
        .trim()
        .to_string();
    if token.is_empty() {
        return Err(AppError::InvalidInput("API token cannot be empty".to_string()));
    }

    let credentials = Credentials {
        username: args.username.clone(),
        auth_token: token,
    };

    // Only persist a token the service accepts.
    let remote = ctx.connector.connect(&credentials, &ctx.config)?;
    remote.list_goals().await?;
    info!(username = %credentials.username, "token verified");

    ctx.config.set([
        (KEY_AUTH_TOKEN, credentials.auth_token),
        (KEY_USERNAME, credentials.username),
    ])?;
    print_success("Success!");
    Ok(())
}

pub fn handle_config_command(ctx: &mut Context, args: &ConfigArgs) -> AppResult<()> {
    if let Some(settings) = &args.settings {
        let pairs = parse_pairs(settings)?;
        ctx.config.set(pairs)?;
    }

    print_config(ctx);
    Ok(())
}

fn print_config(ctx: &Context) {
    let values = ctx.config.get_all();
    if values.is_empty() {
        print_info("No settings yet.");
    }

    for (key, value) in values {
        if key == KEY_AUTH_TOKEN {
            OutputStyle::print_field_colored(key, "✓ (hidden)", OutputStyle::muted);
        } else {
            OutputStyle::print_field(key, value);
        }
    }
    print_info(&format!("Config file: {}", ctx.config.path().display()));
}
