use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;
use crate::profile::ProfileRegistry;

#[derive(Debug, Serialize)]
struct ProfileView<'a> {
    key: &'a str,
    name: &'a str,
    user_name: &'a str,
    last_used: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let registry = ctx.profile_registry()?;
    let views = profile_views(&registry);

    if ctx.output.mode() == OutputMode::Text && views.is_empty() {
        println!("0 profiles");
        return Ok(());
    }

    let lines = views.iter().map(format_line);
    ctx.output.emit(lines, &views)
}

fn profile_views(registry: &ProfileRegistry) -> Vec<ProfileView<'_>> {
    registry
        .records()
        .iter()
        .map(|record| ProfileView {
            key: &record.key,
            name: &record.display_name,
            user_name: &record.identifier,
            last_used: registry.last_used_key() == Some(record.key.as_str()),
        })
        .collect()
}

fn format_line(view: &ProfileView<'_>) -> String {
    let marker = if view.last_used { "*" } else { " " };
    if view.user_name.is_empty() {
        format!("{marker} {}: {}", view.key, view.name)
    } else {
        format!("{marker} {}: {} <{}>", view.key, view.name, view.user_name)
    }
}
