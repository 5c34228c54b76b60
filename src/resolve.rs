use serde::Serialize;

use crate::config::{Config, Profile};

/// Which rule picked the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Deck,
    ExplicitDefault,
    Catchall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub profile: &'a Profile,
    pub kind: MatchKind,
}

/// Returns the profile to use for `deck_name`, or `None` when nothing applies.
///
/// Enabled profiles are scanned in stored order and the first listing the deck
/// wins. Without a deck match, the declared default profile is used when it is
/// enabled, otherwise the first enabled profile without a deck list.
pub fn resolve<'a>(deck_name: &str, config: &'a Config) -> Option<&'a Profile> {
    resolve_explained(deck_name, config).map(|resolution| resolution.profile)
}

pub fn resolve_explained<'a>(deck_name: &str, config: &'a Config) -> Option<Resolution<'a>> {
    let mut enabled = config.profiles.iter().filter(|profile| profile.enabled);

    if let Some(profile) = enabled
        .clone()
        .find(|profile| profile.matches_deck(deck_name, config.match_subdecks))
    {
        return Some(Resolution {
            profile,
            kind: MatchKind::Deck,
        });
    }

    if let Some(name) = config.default_profile.as_deref() {
        if let Some(profile) = enabled.clone().find(|profile| profile.name == name) {
            return Some(Resolution {
                profile,
                kind: MatchKind::ExplicitDefault,
            });
        }
    }

    enabled
        .find(|profile| profile.is_catchall())
        .map(|profile| Resolution {
            profile,
            kind: MatchKind::Catchall,
        })
}
