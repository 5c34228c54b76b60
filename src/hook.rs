use serde::Serialize;
use tracing::{debug, info, warn};

use crate::card::{FieldSource, clean_field_content};
use crate::compose::{compose, encode_field_content, has_placeholder};
use crate::config::Config;
use crate::launch::{Launcher, NOTIFIED_TARGET, Notifier};
use crate::resolve::{MatchKind, resolve_explained};

/// The host's "answer shown" notification.
#[derive(Debug)]
pub struct AnswerShown<'a, C: FieldSource> {
    pub deck_name: &'a str,
    pub card: &'a C,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum HookOutcome {
    ConfigUnavailable {
        reason: String,
    },
    Disabled,
    NoProfile,
    Unusable {
        profile: String,
    },
    MissingField {
        profile: String,
        field: String,
    },
    Composed {
        profile: String,
        matched_by: MatchKind,
        url: String,
    },
    Opened {
        profile: String,
        matched_by: MatchKind,
        url: String,
    },
    LaunchFailed {
        profile: String,
        url: String,
        reason: String,
    },
}

/// Runs resolve, compose and launch for one answer-reveal event. Every failure
/// degrades to doing nothing; only launch failures reach the notifier.
pub struct ReviewHook<'a, L, N> {
    config: &'a Config,
    launcher: L,
    notifier: N,
    dry_run: bool,
}

impl<'a, L: Launcher, N: Notifier> ReviewHook<'a, L, N> {
    pub fn new(config: &'a Config, launcher: L, notifier: N) -> Self {
        Self {
            config,
            launcher,
            notifier,
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn on_answer_shown<C: FieldSource>(&self, event: &AnswerShown<'_, C>) -> HookOutcome {
        if !self.config.addon_enabled {
            debug!("add-on disabled, skipping");
            return HookOutcome::Disabled;
        }

        let Some(resolution) = resolve_explained(event.deck_name, self.config) else {
            debug!(deck = event.deck_name, "no profile for deck");
            return HookOutcome::NoProfile;
        };
        let profile = resolution.profile;
        debug!(deck = event.deck_name, profile = %profile.name, matched_by = ?resolution.kind, "resolved profile");

        if !profile.is_usable() {
            debug!(profile = %profile.name, "profile has no field or template");
            return HookOutcome::Unusable {
                profile: profile.name.clone(),
            };
        }

        let Some(raw) = event.card.field(&profile.field_name) else {
            debug!(profile = %profile.name, field = %profile.field_name, "field not on card");
            return HookOutcome::MissingField {
                profile: profile.name.clone(),
                field: profile.field_name.clone(),
            };
        };

        let content = clean_field_content(raw);
        let content = if self.config.encode_content {
            encode_field_content(&content)
        } else {
            content
        };
        if !has_placeholder(&profile.url_template) {
            debug!(profile = %profile.name, "template has no placeholder, using it verbatim");
        }
        let url = compose(&profile.url_template, &content);

        if self.dry_run {
            return HookOutcome::Composed {
                profile: profile.name.clone(),
                matched_by: resolution.kind,
                url,
            };
        }

        match self.launcher.open(&url, profile.application()) {
            Ok(()) => {
                info!(profile = %profile.name, url = %url, "opened url");
                HookOutcome::Opened {
                    profile: profile.name.clone(),
                    matched_by: resolution.kind,
                    url,
                }
            }
            Err(err) => {
                warn!(
                    target: NOTIFIED_TARGET,
                    profile = %profile.name,
                    url = %url,
                    error = %err,
                    "failed to open url"
                );
                self.notifier.notify(&format!("could not open {url}: {err}"));
                HookOutcome::LaunchFailed {
                    profile: profile.name.clone(),
                    url,
                    reason: err.to_string(),
                }
            }
        }
    }
}
