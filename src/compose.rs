use url::form_urlencoded;

pub const PLACEHOLDER: &str = "{{field_content}}";

/// Substitutes every placeholder in `template` with `field_content`.
///
/// A template without the placeholder is returned unchanged.
pub fn compose(template: &str, field_content: &str) -> String {
    template.replace(PLACEHOLDER, field_content)
}

pub fn has_placeholder(template: &str) -> bool {
    template.contains(PLACEHOLDER)
}

/// Percent-encodes content for a query component. Spaces become `%20`
/// rather than `+` so the result is also valid inside a path.
pub fn encode_field_content(content: &str) -> String {
    form_urlencoded::byte_serialize(content.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode_field_content("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_field_content("1+1"), "1%2B1");
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(encode_field_content("¿qué?"), "%C2%BFqu%C3%A9%3F");
    }

    #[test]
    fn detects_placeholder() {
        assert!(has_placeholder("https://x.com/?q={{field_content}}"));
        assert!(!has_placeholder("https://x.com/?q={{Front}}"));
    }
}
