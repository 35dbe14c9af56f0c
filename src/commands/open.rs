use crate::cli::OpenArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::launch::{self, LaunchPlan, Launcher, ProcessLauncher};
use crate::profile;

pub async fn run(ctx: &AppContext, args: OpenArgs) -> AppResult<()> {
    run_with(ctx, args, &ProcessLauncher).await
}

pub async fn run_with<L: Launcher>(
    ctx: &AppContext,
    args: OpenArgs,
    launcher: &L,
) -> AppResult<()> {
    let registry = ctx.profile_registry()?;
    let requested = args.user.unwrap_or_else(|| ctx.settings.open_profile());
    let profile = profile::resolve(&registry, Some(requested.as_str()))?;

    let urls = launch::load_urls(&args.file)?;
    let plan = LaunchPlan::new(ctx.settings.browser_binary(), &profile, args.incognito, urls);

    let lines = std::iter::once(plan.command_line()).chain(plan.urls.iter().cloned());
    ctx.output.emit(lines, &plan)?;

    if args.dry_run {
        return Ok(());
    }

    launcher.launch(&plan).await
}
