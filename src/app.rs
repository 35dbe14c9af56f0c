use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        chrome_dir,
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(chrome_dir, json, verbose)?;

    match command {
        Command::Export(args) => commands::export::run(&ctx, args),
        Command::Open(args) => commands::open::run(&ctx, args).await,
        Command::Profiles => commands::profiles::run(&ctx),
    }
}
