use serde::Serialize;

use crate::cli::{DeckCommand, DeckMutateArgs};
use crate::config::resolve_profile_name;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct DeckChange {
    profile: String,
    changed: usize,
    decks: Vec<String>,
}

pub fn run(ctx: &AppContext, command: DeckCommand) -> AppResult<()> {
    match command {
        DeckCommand::Add(args) => {
            let change = mutate(ctx, &args, |config, name, decks| config.add_decks(name, decks))?;
            let text = format!("{}: added {} deck(s)", change.profile, change.changed);
            ctx.output.emit(&text, &change)
        }
        DeckCommand::Rm(args) => {
            let change =
                mutate(ctx, &args, |config, name, decks| config.remove_decks(name, decks))?;
            let text = format!("{}: removed {} deck(s)", change.profile, change.changed);
            ctx.output.emit(&text, &change)
        }
    }
}

fn mutate(
    ctx: &AppContext,
    args: &DeckMutateArgs,
    edit: impl FnOnce(&mut crate::config::Config, &str, &[String]) -> AppResult<usize>,
) -> AppResult<DeckChange> {
    let name = resolve_profile_name(&args.profile);
    ctx.update(|config| {
        let changed = edit(config, &name, &args.decks)?;
        let decks = config.profile_mut(&name)?.decks.clone();
        Ok(DeckChange {
            profile: name.clone(),
            changed,
            decks,
        })
    })
}
