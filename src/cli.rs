use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "bookmarks",
    version,
    about = "Export Chrome bookmark folders and open them in a browser window"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Chrome user data directory")]
    pub chrome_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Export(ExportArgs),
    Open(OpenArgs),
    Profiles,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(help = "Bookmark folder path, e.g. \"bar/Work/Daily\"")]
    pub path: Option<String>,
    #[arg(
        short = 'o',
        long = "output",
        num_args = 0..=1,
        default_missing_value = ".",
        help = "Save the list to a file (or into a directory), else print it"
    )]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Only list titles and urls")]
    pub simple: bool,
    #[arg(long, help = "Profile name or user name that owns the bookmarks")]
    pub profile: Option<String>,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    #[arg(help = "JSON file with a list of objects carrying \"url\"")]
    pub file: PathBuf,
    #[arg(
        short = 'i',
        long,
        action = ArgAction::Set,
        default_value_t = true,
        help = "Open all urls in incognito"
    )]
    pub incognito: bool,
    #[arg(short = 'u', long, help = "Profile name or user name to open with")]
    pub user: Option<String>,
    #[arg(long, help = "Print the browser command without running it")]
    pub dry_run: bool,
}
