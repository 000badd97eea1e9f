// Language tags and locale preference handling.

use std::fmt;

/// An opaque language identifier such as `en` or `de_DE`.
///
/// Tags are the key into the active dictionary set. They are compared
/// byte-for-byte and case-sensitively; the engine never interprets their
/// structure beyond the prefix deduplication in [`preferred_tags`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag from any string-like value.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for LanguageTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive dictionary candidates from an ordered locale preference list.
///
/// Entries are processed in order. Encoding suffixes are stripped
/// (`en_US.utf8` becomes `en_US`), `C`, `POSIX` and single-character
/// entries are skipped, and an entry whose two-letter prefix matches the
/// previously kept entry is dropped (`en_US` right after `en` adds
/// nothing).
pub fn preferred_tags(prefs: &[&str]) -> Vec<LanguageTag> {
    let mut tags = Vec::new();
    let mut last_prefix: Option<String> = None;

    for pref in prefs {
        let pref = pref.split('.').next().unwrap_or("");
        if pref.len() < 2 || pref == "POSIX" {
            continue;
        }
        if let Some(prefix) = &last_prefix {
            if pref.starts_with(prefix.as_str()) {
                continue;
            }
        }
        last_prefix = Some(pref.chars().take(2).collect());
        tags.push(LanguageTag::new(pref));
    }

    tags
}
