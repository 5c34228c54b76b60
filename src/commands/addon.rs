use serde::Serialize;

use crate::cli::AddonCommand;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct AddonStatus {
    enabled: bool,
    profiles: usize,
    default_profile: Option<String>,
}

pub fn run(ctx: &AppContext, command: AddonCommand) -> AppResult<()> {
    let enabled = match command {
        AddonCommand::Status => ctx.config.addon_enabled,
        AddonCommand::On => set(ctx, |_| true)?,
        AddonCommand::Off => set(ctx, |_| false)?,
        AddonCommand::Toggle => set(ctx, |current| !current)?,
    };

    let status = AddonStatus {
        enabled,
        profiles: ctx.config.profiles.len(),
        default_profile: ctx.config.default_profile.clone(),
    };
    let text = format!("add-on {}", if enabled { "enabled" } else { "disabled" });
    ctx.output.emit(&text, &status)
}

fn set(ctx: &AppContext, next: impl FnOnce(bool) -> bool) -> AppResult<bool> {
    ctx.update(|config| {
        config.addon_enabled = next(config.addon_enabled);
        Ok(config.addon_enabled)
    })
}
