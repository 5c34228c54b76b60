use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::warn;

use crate::card::Card;
use crate::cli::RevealArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::hook::{AnswerShown, HookOutcome, ReviewHook};
use crate::launch::{StderrNotifier, SystemLauncher};

pub fn run(ctx: &AppContext, args: RevealArgs) -> AppResult<()> {
    if let Some(reason) = &ctx.config_error {
        warn!(
            config = %ctx.paths().config_file().display(),
            error = %reason,
            "configuration unavailable, skipping"
        );
        let outcome = HookOutcome::ConfigUnavailable {
            reason: reason.clone(),
        };
        return ctx.output.emit(&describe(&outcome), &outcome);
    }

    let card = build_card(args.card_json.as_deref(), &args.fields)?;
    let hook = ReviewHook::new(&ctx.config, SystemLauncher::new(), StderrNotifier)
        .dry_run(args.dry_run);

    let outcome = hook.on_answer_shown(&AnswerShown {
        deck_name: &args.deck,
        card: &card,
    });

    ctx.output.emit(&describe(&outcome), &outcome)
}

/// Fields given with `--field` override those read from JSON.
fn build_card(card_json: Option<&Path>, fields: &[String]) -> AppResult<Card> {
    let mut card = match card_json {
        Some(path) => Card::from_json(&read_source(path)?)?,
        None => Card::new(),
    };

    for raw in fields {
        let (name, value) = Card::parse_assignment(raw)?;
        card.insert(name, value);
    }

    Ok(card)
}

fn read_source(path: &Path) -> AppResult<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }

    Ok(fs::read_to_string(path)?)
}

fn describe(outcome: &HookOutcome) -> String {
    match outcome {
        HookOutcome::ConfigUnavailable { .. } => {
            "configuration could not be loaded; nothing opened".to_string()
        }
        HookOutcome::Disabled => "add-on disabled; nothing opened".to_string(),
        HookOutcome::NoProfile => "no profile for this deck; nothing opened".to_string(),
        HookOutcome::Unusable { profile } => {
            format!("{profile}: missing field name or url template; nothing opened")
        }
        HookOutcome::MissingField { profile, field } => {
            format!("{profile}: card has no `{field}` field; nothing opened")
        }
        HookOutcome::Composed { profile, url, .. } => format!("{profile}: {url}"),
        HookOutcome::Opened { profile, url, .. } => format!("{profile}: opened {url}"),
        HookOutcome::LaunchFailed { profile, url, .. } => {
            format!("{profile}: failed to open {url}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::FieldSource;

    #[test]
    fn flags_override_json_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("card.json");
        fs::write(&path, r#"{"Front":"hola","Back":"hello"}"#).expect("write card");

        let card = build_card(Some(&path), &["Front=adiós".to_string()]).expect("card");
        assert_eq!(card.field("Front"), Some("adiós"));
        assert_eq!(card.field("Back"), Some("hello"));
    }

    #[test]
    fn rejects_malformed_field_flag() {
        assert!(build_card(None, &["Front".to_string()]).is_err());
    }

    #[test]
    fn describes_skips_and_opens() {
        assert_eq!(
            describe(&HookOutcome::NoProfile),
            "no profile for this deck; nothing opened"
        );
        let opened = HookOutcome::Opened {
            profile: "spanish".to_string(),
            matched_by: crate::resolve::MatchKind::Deck,
            url: "https://x.com/?q=hola".to_string(),
        };
        assert_eq!(describe(&opened), "spanish: opened https://x.com/?q=hola");
    }
}
