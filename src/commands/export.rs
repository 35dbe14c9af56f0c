use std::path::PathBuf;

use crate::bookmark::{self, ProjectionMode, RootSet};
use crate::cli::ExportArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::json;
use crate::profile;

const DEFAULT_EXPORT_FILE: &str = "bookmarks.json";

pub fn run(ctx: &AppContext, args: ExportArgs) -> AppResult<()> {
    let registry = ctx.profile_registry()?;
    let profile = profile::resolve(&registry, args.profile.as_deref())?;

    let roots = RootSet::load(&ctx.browser.bookmarks_file(&profile))?;
    let selection = bookmark::resolve(&roots, args.path.as_deref())?;
    let projection = bookmark::project(selection, ProjectionMode::from_simple(args.simple))?;

    match args.output {
        Some(destination) => {
            let path = export_destination(destination);
            json::write_file(&path, &projection)?;
            tracing::info!(
                path = %path.display(),
                entries = projection.len(),
                "saved bookmark list"
            );
            Ok(())
        }
        None => json::print(&projection),
    }
}

/// A directory destination receives a default file name.
fn export_destination(destination: PathBuf) -> PathBuf {
    if destination.is_dir() {
        destination.join(DEFAULT_EXPORT_FILE)
    } else {
        destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_destination_gets_default_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(
            export_destination(dir.path().to_path_buf()),
            dir.path().join(DEFAULT_EXPORT_FILE)
        );
    }

    #[test]
    fn file_destination_is_kept() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("work.json");
        assert_eq!(export_destination(file.clone()), file);
    }
}
