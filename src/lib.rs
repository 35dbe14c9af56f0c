pub mod app;
pub mod bookmark;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod launch;
pub mod logging;
pub mod output;
pub mod profile;

use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
