use tracing::info;

use crate::cli::SlugArgs;
use crate::core::data::Datapoint;
use crate::manager::Context;
use crate::utils::error::AppResult;
use crate::utils::format::format_points;
use crate::utils::print_success;

pub async fn handle_upload_command(ctx: &mut Context, args: &SlugArgs) -> AppResult<()> {
    let slug = args.slug.as_str();
    let timer = ctx.timers.load(slug)?;
    let points = ctx.timers.points(&timer)?;

    println!("Goal: {}, Points: {}. Uploading...", slug, format_points(points));
    send_datapoint(ctx, slug, points).await?;
    print_success("Uploaded.");

    if ctx.prompter.confirm("Delete timer file?")? {
        ctx.timers.delete(slug)?;
        print_success(&format!("Deleted timer for {}.", slug));
    }
    Ok(())
}

/// Upload `points` for `slug`, then drop the local timer. The timer is only
/// removed once the service has accepted the datapoint.
pub async fn upload_and_delete(ctx: &mut Context, slug: &str, points: f64) -> AppResult<()> {
    send_datapoint(ctx, slug, points).await?;
    ctx.timers.delete(slug)?;
    print_success(&format!("Uploaded {} to {}.", format_points(points), slug));
    Ok(())
}

async fn send_datapoint(ctx: &Context, slug: &str, points: f64) -> AppResult<()> {
    let remote = ctx.remote()?;
    let datapoint = Datapoint {
        slug: slug.to_string(),
        value: points,
        timestamp: ctx.timers.now().timestamp(),
        comment: ctx.config.comment().to_string(),
    };
    remote.create_datapoint(&datapoint).await?;
    info!(slug, points, "datapoint created");
    Ok(())
}
