//! Placeholder scanning and substitution
//!
//! A placeholder is `{{key}}` where the key is one or more ASCII letters,
//! digits, underscores or hyphens. Whitespace just inside the braces is
//! tolerated, so `{{ key }}` names the same key.

use std::borrow::Cow;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_-]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Distinct placeholder keys, in order of first occurrence
pub fn placeholder_keys(template: &str) -> IndexSet<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Replace every placeholder occurrence with the text `resolve` returns
pub fn substitute<'t, F>(template: &'t str, mut resolve: F) -> Cow<'t, str>
where
    F: FnMut(&str) -> String,
{
    PLACEHOLDER.replace_all(template, |caps: &Captures| {
        caps.get(1).map(|m| resolve(m.as_str())).unwrap_or_default()
    })
}

/// Escape text for safe inclusion in HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_in_first_occurrence_order() {
        let keys = placeholder_keys("{{b}} {{a}} {{b}} {{c-d_1}}");
        let keys: Vec<&str> = keys.into_iter().collect();
        assert_eq!(keys, vec!["b", "a", "c-d_1"]);
    }

    #[test]
    fn test_whitespace_inside_braces() {
        let keys: Vec<&str> = placeholder_keys("{{ title }}{{\ttitle}}").into_iter().collect();
        assert_eq!(keys, vec!["title"]);
    }

    #[test]
    fn test_non_placeholders_ignored() {
        let keys = placeholder_keys("{single} {{ two words }} {{}} {{a.b}}");
        assert!(keys.is_empty());
    }

    #[test]
    fn test_triple_braces_match_inner_pair() {
        let keys: Vec<&str> = placeholder_keys("{{{x}}}").into_iter().collect();
        assert_eq!(keys, vec!["x"]);
        assert_eq!(substitute("{{{x}}}", |_| "1".to_string()), "{1}");
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let out = substitute("<p>{{a}}-{{ a }}-{{b}}</p>", |key| key.to_uppercase());
        assert_eq!(out, "<p>A-A-B</p>");
    }

    #[test]
    fn test_substitute_without_placeholders_borrows() {
        let out = substitute("<hr/>", |_| unreachable!());
        assert!(matches!(out, Cow::Borrowed("<hr/>")));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>hi & "bye"</b>"#),
            "&lt;b&gt;hi &amp; &quot;bye&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("it's"), "it&#39;s");
    }
}
