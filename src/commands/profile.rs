use crate::cli::{ProfileCommand, ProfileEditArgs, ProfileExportArgs, ProfileImportArgs};
use crate::config::store::{export_profile, import_profile};
use crate::config::{Config, Profile, resolve_profile_name};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::OutputMode;

pub fn run(ctx: &AppContext, command: ProfileCommand) -> AppResult<()> {
    match command {
        ProfileCommand::Ls => list(ctx),
        ProfileCommand::Show(args) => {
            let name = resolve_profile_name(&args.name);
            let profile = find(&ctx.config, &name)?;
            ctx.output.emit_lines(&describe(profile, &ctx.config), profile)
        }
        ProfileCommand::Add(args) => {
            let profile = apply_edits(Profile::new(resolve_profile_name(&args.name)), &args);
            ctx.update(|config| config.add_profile(profile.clone()))?;
            let text = format!("added profile {}", profile.name);
            ctx.output.emit(&text, &profile)
        }
        ProfileCommand::Edit(args) => {
            let name = resolve_profile_name(&args.name);
            let profile = ctx.update(|config| {
                let profile = config.profile_mut(&name)?;
                *profile = apply_edits(profile.clone(), &args);
                Ok(profile.clone())
            })?;
            let text = format!("updated profile {}", profile.name);
            ctx.output.emit(&text, &profile)
        }
        ProfileCommand::Rm(args) => {
            let name = resolve_profile_name(&args.name);
            let removed = ctx.update(|config| config.remove_profile(&name))?;
            let text = format!("removed profile {}", removed.name);
            ctx.output.emit(&text, &removed)
        }
        ProfileCommand::Enable(args) => set_enabled(ctx, &args.name, true),
        ProfileCommand::Disable(args) => set_enabled(ctx, &args.name, false),
        ProfileCommand::Default(args) => {
            let name = resolve_profile_name(&args.name);
            ctx.update(|config| config.set_default_profile(&name))?;
            let text = format!("default profile is now {name}");
            ctx.output.emit(&text, &serde_json::json!({ "default_profile": name }))
        }
        ProfileCommand::Import(args) => import(ctx, args),
        ProfileCommand::Export(args) => export(ctx, args),
    }
}

fn list(ctx: &AppContext) -> AppResult<()> {
    let profiles = &ctx.config.profiles;
    if ctx.output.mode() == OutputMode::Json {
        return ctx.output.emit("", profiles);
    }

    if profiles.is_empty() {
        println!("0 profiles");
        return Ok(());
    }

    for (index, profile) in profiles.iter().enumerate() {
        let mut flags = Vec::new();
        if ctx.config.default_profile.as_deref() == Some(profile.name.as_str()) {
            flags.push("default");
        }
        if !profile.enabled {
            flags.push("disabled");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };
        let decks = if profile.decks.is_empty() {
            "(any deck)".to_string()
        } else {
            profile.decks.join(", ")
        };

        println!("{}. {}{flags}", index + 1, profile.name);
        println!("   decks: {decks}");
    }

    Ok(())
}

fn find<'a>(config: &'a Config, name: &str) -> AppResult<&'a Profile> {
    config
        .profile(name)
        .ok_or_else(|| AppError::NotFound(format!("profile `{name}`")))
}

fn set_enabled(ctx: &AppContext, name: &str, enabled: bool) -> AppResult<()> {
    let name = resolve_profile_name(name);
    let profile = ctx.update(|config| {
        let profile = config.profile_mut(&name)?;
        profile.enabled = enabled;
        Ok(profile.clone())
    })?;

    let state = if enabled { "enabled" } else { "disabled" };
    let text = format!("{}: {state}", profile.name);
    ctx.output.emit(&text, &profile)
}

fn import(ctx: &AppContext, args: ProfileImportArgs) -> AppResult<()> {
    let profile = import_profile(&args.path, args.name.as_deref())?;
    ctx.update(|config| config.add_profile(profile.clone()))?;
    let text = format!("imported profile {}", profile.name);
    ctx.output.emit(&text, &profile)
}

fn export(ctx: &AppContext, args: ProfileExportArgs) -> AppResult<()> {
    let name = resolve_profile_name(&args.name);
    let profile = find(&ctx.config, &name)?;
    export_profile(&args.path, profile)?;

    let text = format!("exported profile {} to {}", profile.name, args.path.display());
    ctx.output.emit(&text, profile)
}

/// Overlays the flags that were given; a non-empty `--deck` list replaces the
/// existing one.
fn apply_edits(mut profile: Profile, args: &ProfileEditArgs) -> Profile {
    if let Some(field) = &args.field {
        profile.field_name = field.trim().to_string();
    }
    if let Some(url) = &args.url {
        profile.url_template = url.trim().to_string();
    }
    if let Some(app) = &args.app {
        profile.application = app.trim().to_string();
    }
    if !args.decks.is_empty() {
        profile.decks = args.decks.iter().map(|deck| deck.trim().to_string()).collect();
    }
    if args.disabled {
        profile.enabled = false;
    }

    profile
}

fn describe(profile: &Profile, config: &Config) -> Vec<String> {
    let is_default = config.default_profile.as_deref() == Some(profile.name.as_str());
    vec![
        format!("name: {}", profile.name),
        format!("enabled: {}", profile.enabled),
        format!("default: {is_default}"),
        format!("field: {}", profile.field_name),
        format!("url: {}", profile.url_template),
        format!(
            "application: {}",
            profile.application().unwrap_or("(system default)")
        ),
        format!(
            "decks: {}",
            if profile.decks.is_empty() {
                "(any deck)".to_string()
            } else {
                profile.decks.join(", ")
            }
        ),
    ]
}
