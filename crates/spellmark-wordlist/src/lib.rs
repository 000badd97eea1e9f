// spellmark-wordlist: a wordlist-backed dictionary provider.
//
// The simplest real backend: a base word set per language, plus the
// personal and session layers the engine's edit operations feed, plus a
// replacement store that lets user corrections jump to the front of the
// suggestion list. Base sets are shared between provider instances via
// `Arc`, so repeated request/release cycles never copy the wordlist.

mod suggest;

use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use spellmark_core::LanguageTag;
use spellmark_engine::{DictionaryProvider, ProviderRegistry};

/// Maximum number of suggestions returned per word.
const MAX_SUGGESTIONS: usize = 10;

/// A dictionary provider backed by an in-memory word set.
pub struct WordlistProvider {
    tag: LanguageTag,
    words: Arc<HashSet<String>>,
    personal: HashSet<String>,
    session: HashSet<String>,
    replacements: HashMap<String, String>,
}

impl WordlistProvider {
    /// Create a provider for `tag` over a shared base word set.
    pub fn new(tag: LanguageTag, words: Arc<HashSet<String>>) -> Self {
        Self {
            tag,
            words,
            personal: HashSet::new(),
            session: HashSet::new(),
            replacements: HashMap::new(),
        }
    }

    /// Create a provider owning its own base word set; convenient in
    /// tests and one-off tools.
    pub fn from_words<I, S>(tag: LanguageTag, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: HashSet<String> = words.into_iter().map(Into::into).collect();
        Self::new(tag, Arc::new(set))
    }
}

impl DictionaryProvider for WordlistProvider {
    /// Personal and session layers match exactly; dictionary words also
    /// match through a lowercase fold, so "Hello" passes against a
    /// lowercase wordlist.
    fn check(&self, word: &str) -> bool {
        if self.personal.contains(word) || self.session.contains(word) {
            return true;
        }
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(word.to_lowercase().as_str())
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        suggest::rank(
            word,
            self.replacements.get(word),
            self.words.iter(),
            MAX_SUGGESTIONS,
        )
    }

    fn learn_personal(&mut self, word: &str) {
        self.personal.insert(word.to_string());
    }

    fn learn_session(&mut self, word: &str) {
        self.session.insert(word.to_string());
    }

    fn store_replacement(&mut self, old: &str, new: &str) {
        self.replacements.insert(old.to_string(), new.to_string());
    }

    fn describe(&self) -> LanguageTag {
        self.tag.clone()
    }
}

/// A registry handing out [`WordlistProvider`]s, one base word set per
/// language tag.
#[derive(Default)]
pub struct WordlistRegistry {
    lists: HashMap<LanguageTag, Arc<HashSet<String>>>,
}

impl WordlistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the word set for `tag`.
    pub fn insert_language<I, S>(&mut self, tag: LanguageTag, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: HashSet<String> = words.into_iter().map(Into::into).collect();
        self.lists.insert(tag, Arc::new(set));
    }

    /// Builder-style variant of [`insert_language`](Self::insert_language).
    pub fn with_language<I, S>(mut self, tag: LanguageTag, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_language(tag, words);
        self
    }

    /// Whether no language has been registered.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.lists.len()
    }
}

impl ProviderRegistry for WordlistRegistry {
    fn list_available_tags(&self) -> Vec<LanguageTag> {
        let mut tags: Vec<LanguageTag> = self.lists.keys().cloned().collect();
        tags.sort();
        tags
    }

    fn request_provider(&mut self, tag: &LanguageTag) -> Option<Box<dyn DictionaryProvider>> {
        let words = self.lists.get(tag)?;
        Some(Box::new(WordlistProvider::new(
            tag.clone(),
            Arc::clone(words),
        )))
    }

    fn release_provider(&mut self, provider: Box<dyn DictionaryProvider>) {
        // Personal, session and replacement layers are scoped to the
        // acquisition; the shared base set stays in the registry.
        drop(provider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_provider() -> WordlistProvider {
        WordlistProvider::from_words(
            LanguageTag::new("en"),
            ["hello", "world", "word", "work"],
        )
    }

    #[test]
    fn check_consults_base_words() {
        let provider = en_provider();
        assert!(provider.check("hello"));
        assert!(!provider.check("wrold"));
    }

    #[test]
    fn check_folds_case_against_base_words() {
        let provider = en_provider();
        assert!(provider.check("Hello"));
        assert!(provider.check("HELLO"));
    }

    #[test]
    fn personal_layer_matches_exactly() {
        let mut provider = en_provider();
        provider.learn_personal("Wrold");
        assert!(provider.check("Wrold"));
        assert!(!provider.check("wrold"));
    }

    #[test]
    fn session_layer_matches_exactly() {
        let mut provider = en_provider();
        provider.learn_session("xyzzy");
        assert!(provider.check("xyzzy"));
        assert!(!provider.check("Xyzzy"));
    }

    #[test]
    fn describe_returns_the_tag() {
        assert_eq!(en_provider().describe(), LanguageTag::new("en"));
    }

    #[test]
    fn suggest_ranks_close_words_first() {
        let provider = en_provider();
        let suggestions = provider.suggest("wrold");
        assert!(suggestions.contains(&"world".to_string()));
        // "hello" is too far away to qualify.
        assert!(!suggestions.contains(&"hello".to_string()));
    }

    #[test]
    fn stored_replacement_ranks_first() {
        let mut provider = en_provider();
        provider.store_replacement("wrold", "word");
        let suggestions = provider.suggest("wrold");
        assert_eq!(suggestions.first(), Some(&"word".to_string()));
        // Still deduplicated: "word" appears exactly once.
        assert_eq!(suggestions.iter().filter(|s| *s == "word").count(), 1);
    }

    #[test]
    fn registry_lists_tags_sorted() {
        let registry = WordlistRegistry::new()
            .with_language(LanguageTag::new("fi"), ["hei"])
            .with_language(LanguageTag::new("en"), ["hello"]);
        assert_eq!(
            registry.list_available_tags(),
            vec![LanguageTag::new("en"), LanguageTag::new("fi")]
        );
    }

    #[test]
    fn registry_request_unknown_tag_returns_none() {
        let mut registry = WordlistRegistry::new();
        assert!(
            registry
                .request_provider(&LanguageTag::new("xx"))
                .is_none()
        );
    }

    #[test]
    fn providers_share_the_base_set() {
        let mut registry =
            WordlistRegistry::new().with_language(LanguageTag::new("en"), ["hello"]);
        let a = registry.request_provider(&LanguageTag::new("en")).unwrap();
        let b = registry.request_provider(&LanguageTag::new("en")).unwrap();
        assert!(a.check("hello"));
        assert!(b.check("hello"));
        registry.release_provider(a);
        // Releasing one acquisition leaves the base set intact.
        assert!(b.check("hello"));
    }

    #[test]
    fn session_layer_does_not_leak_across_acquisitions() {
        let mut registry =
            WordlistRegistry::new().with_language(LanguageTag::new("en"), ["hello"]);
        let mut a = registry.request_provider(&LanguageTag::new("en")).unwrap();
        a.learn_session("xyzzy");
        registry.release_provider(a);
        let b = registry.request_provider(&LanguageTag::new("en")).unwrap();
        assert!(!b.check("xyzzy"));
    }
}
