use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::{AppContext, ConfigLoad};
use crate::error::AppResult;
use crate::logging;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config,
        json,
        verbose,
        command,
    } = cli;

    // Review must never be interrupted by a broken configuration.
    let load = match command {
        Command::Reveal(_) => ConfigLoad::Lenient,
        _ => ConfigLoad::Strict,
    };
    let ctx = AppContext::bootstrap(config, json, verbose, load)?;
    let _log_guard = match logging::init(ctx.paths().log_dir(), ctx.verbose) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            None
        }
    };

    match command {
        Command::Reveal(args) => commands::reveal::run(&ctx, args),
        Command::Resolve(args) => commands::resolve::run(&ctx, args),
        Command::Compose(args) => commands::compose::run(&ctx, args),
        Command::Profile(args) => commands::profile::run(&ctx, args.command),
        Command::Deck(args) => commands::deck::run(&ctx, args.command),
        Command::Addon(args) => commands::addon::run(&ctx, args.command),
    }
}
