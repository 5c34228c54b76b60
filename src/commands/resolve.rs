use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::resolve::{MatchKind, resolve_explained};

#[derive(Debug, Serialize)]
struct ResolveView<'a> {
    deck: &'a str,
    profile: Option<&'a str>,
    matched_by: Option<MatchKind>,
}

pub fn run(ctx: &AppContext, args: ResolveArgs) -> AppResult<()> {
    let resolution = resolve_explained(&args.deck, &ctx.config);
    let view = ResolveView {
        deck: &args.deck,
        profile: resolution.map(|resolution| resolution.profile.name.as_str()),
        matched_by: resolution.map(|resolution| resolution.kind),
    };

    let text = match resolution {
        Some(resolution) => {
            let rule = match resolution.kind {
                MatchKind::Deck => "deck match",
                MatchKind::ExplicitDefault => "default profile",
                MatchKind::Catchall => "profile without decks",
            };
            format!("{}: {} ({rule})", args.deck, resolution.profile.name)
        }
        None => format!("{}: no profile", args.deck),
    };

    ctx.output.emit(&text, &view)
}
