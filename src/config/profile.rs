use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE_NAME: &str = "default";
pub const DEFAULT_FIELD_NAME: &str = "Front";
pub const DEFAULT_URL_TEMPLATE: &str = "https://www.google.com/search?q={{field_content}}";

fn default_enabled() -> bool {
    true
}

fn default_field_name() -> String {
    DEFAULT_FIELD_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default = "default_field_name")]
    pub field_name: String,
    #[serde(default)]
    pub url_template: String,
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub decks: Vec<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_name: default_field_name(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            application: String::new(),
            decks: Vec::new(),
            enabled: true,
        }
    }

    /// A profile with no deck restriction.
    pub fn is_catchall(&self) -> bool {
        self.decks.is_empty()
    }

    /// Both the field and the template are needed to produce a URL.
    pub fn is_usable(&self) -> bool {
        !self.field_name.trim().is_empty() && !self.url_template.trim().is_empty()
    }

    pub fn application(&self) -> Option<&str> {
        let app = self.application.trim();
        if app.is_empty() { None } else { Some(app) }
    }

    pub fn matches_deck(&self, deck_name: &str, match_subdecks: bool) -> bool {
        self.decks.iter().any(|configured| {
            configured == deck_name
                || (match_subdecks
                    && deck_name
                        .strip_prefix(configured.as_str())
                        .is_some_and(|rest| rest.starts_with("::")))
        })
    }
}

/// A standalone profile document. Older files carry no `name`; the
/// importer supplies one.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_field_name")]
    pub field_name: String,
    #[serde(default)]
    pub url_template: String,
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub decks: Vec<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl ProfileFile {
    pub fn into_profile(self, name: String) -> Profile {
        Profile {
            name,
            field_name: self.field_name,
            url_template: self.url_template,
            application: self.application,
            decks: self.decks,
            enabled: self.enabled,
        }
    }
}

pub fn resolve_profile_name(requested: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return DEFAULT_PROFILE_NAME.to_string();
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanish() -> Profile {
        Profile {
            decks: vec!["Spanish".to_string()],
            ..Profile::new("spanish")
        }
    }

    #[test]
    fn blank_name_falls_back_to_default() {
        assert_eq!(resolve_profile_name("  "), "default");
        assert_eq!(resolve_profile_name(" jp "), "jp");
    }

    #[test]
    fn deck_match_is_exact_by_default() {
        let profile = spanish();
        assert!(profile.matches_deck("Spanish", false));
        assert!(!profile.matches_deck("spanish", false));
        assert!(!profile.matches_deck("Spanish::Verbs", false));
    }

    #[test]
    fn subdeck_match_requires_separator() {
        let profile = spanish();
        assert!(profile.matches_deck("Spanish::Verbs", true));
        assert!(!profile.matches_deck("SpanishExtra", true));
    }

    #[test]
    fn blank_application_means_default_handler() {
        let mut profile = spanish();
        profile.application = "   ".to_string();
        assert_eq!(profile.application(), None);
        profile.application = "firefox".to_string();
        assert_eq!(profile.application(), Some("firefox"));
    }

    #[test]
    fn missing_keys_take_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"name":"bare"}"#).expect("parse");
        assert_eq!(profile.field_name, "Front");
        assert!(profile.enabled);
        assert!(profile.decks.is_empty());
        assert!(!profile.is_usable());
    }
}
