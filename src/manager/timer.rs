// Timer commands - start, status, stop, delete

use crate::cli::{SlugArgs, StartArgs, StopArgs};
use crate::core::data::validate_time_format;
use crate::manager::Context;
use crate::manager::upload::upload_and_delete;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_elapsed, format_points, format_with_pattern};
use crate::utils::time_format::format_timestamp;
use crate::utils::{OutputStyle, print_info, print_success};

pub async fn handle_start_command(ctx: &mut Context, args: &StartArgs) -> AppResult<()> {
    let slug = args.slug.as_str();
    ctx.timers.ensure_not_started(slug)?;

    let time_format = match args.time_format.as_deref().filter(|f| !f.is_empty()) {
        Some(format) => format.to_string(),
        None => ctx
            .config
            .time_format()
            .map(str::to_string)
            .ok_or_else(|| AppError::MissingFormat(slug.to_string()))?,
    };
    validate_time_format(&time_format)?;

    let remote = ctx.remote()?;
    if remote.get_goal(slug).await?.is_none() {
        return Err(AppError::GoalNotFound(slug.to_string()));
    }

    ctx.timers.start(slug, &time_format)?;
    print_success(&format!("Started timer for {}.", slug));
    Ok(())
}

pub fn handle_status_command(ctx: &mut Context, args: &SlugArgs) -> AppResult<()> {
    let slug = args.slug.as_str();
    let timer = ctx.timers.load(slug)?;
    let elapsed = ctx.timers.elapsed(&timer);
    let points = ctx.timers.points(&timer)?;

    let state = if timer.is_running() { "running" } else { "stopped" };

    OutputStyle::print_field_colored("Goal", slug, OutputStyle::slug);
    OutputStyle::print_field("State", state);
    OutputStyle::print_field("Start", &format_with_pattern(&timer.start, &timer.time_format));
    OutputStyle::print_field("Elapsed", &format_elapsed(&elapsed));
    OutputStyle::print_field_colored("Points", &format_points(points), OutputStyle::points);
    Ok(())
}

pub async fn handle_stop_command(ctx: &mut Context, args: &StopArgs) -> AppResult<()> {
    let slug = args.slug.as_str();
    let stopped = ctx.timers.stop(slug)?;

    OutputStyle::print_field_colored("Goal", slug, OutputStyle::slug);
    OutputStyle::print_field("Start", &format_timestamp(&stopped.timer.start));
    if let Some(stop) = &stopped.timer.stop {
        OutputStyle::print_field("Stop", &format_timestamp(stop));
    }
    OutputStyle::print_field("Elapsed", &format_elapsed(&stopped.elapsed));
    OutputStyle::print_field_colored("Points", &format_points(stopped.points), OutputStyle::points);

    if args.force_upload || ctx.prompter.confirm("Upload points to Beeminder?")? {
        return upload_and_delete(ctx, slug, stopped.points).await;
    }

    print_info("Goal not uploaded. File saved. Upload with `beetimer upload`. Delete with `beetimer delete`.");
    Ok(())
}

pub fn handle_delete_command(ctx: &mut Context, args: &SlugArgs) -> AppResult<()> {
    ctx.timers.delete(&args.slug)?;
    print_success(&format!("Deleted timer for {}.", args.slug));
    Ok(())
}
