pub mod app;
pub mod card;
pub mod cli;
pub mod commands;
pub mod compose;
pub mod config;
pub mod context;
pub mod error;
pub mod hook;
pub mod launch;
pub mod logging;
pub mod output;
pub mod resolve;

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
