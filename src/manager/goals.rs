use crate::manager::Context;
use crate::utils::error::AppResult;
use crate::utils::{OutputStyle, print_info};

pub async fn handle_goals_command(ctx: &mut Context) -> AppResult<()> {
    let remote = ctx.remote()?;
    let goals = remote.list_goals().await?;

    if goals.is_empty() {
        print_info("No goals found.");
        return Ok(());
    }

    for goal in &goals {
        OutputStyle::print_goal(goal);
    }
    Ok(())
}
