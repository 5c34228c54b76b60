use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("html tag regex"));

/// Anything that can hand out a card field by name.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    fields: BTreeMap<String, String>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let card = serde_json::from_str(raw)?;
        Ok(card)
    }

    /// Parses `NAME=VALUE`; the value may itself contain `=`.
    pub fn parse_assignment(raw: &str) -> AppResult<(String, String)> {
        let Some((name, value)) = raw.split_once('=') else {
            return Err(AppError::InvalidInput(format!(
                "expected NAME=VALUE, got `{raw}`"
            )));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "field name is empty in `{raw}`"
            )));
        }

        Ok((name.to_string(), value.to_string()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldSource for Card {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}

/// Reduces raw field markup to the text a reader sees: tags dropped,
/// entities decoded, surrounding whitespace trimmed.
pub fn clean_field_content(raw: &str) -> String {
    let stripped = HTML_TAG.replace_all(raw, "");
    html_escape::decode_html_entities(&stripped).trim().to_string()
}
