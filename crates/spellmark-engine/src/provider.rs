// Dictionary collaborator seams.
//
// The engine consumes dictionaries through these traits and never knows
// what backs them (wordlist files, a system spelling service, a test
// double). Providers are acquired from a registry when a language is
// activated and handed back when it is deactivated or the engine goes
// away.

use spellmark_core::LanguageTag;

/// A spell-checking backend for one language.
///
/// All calls are synchronous and may be slow relative to keystroke
/// latency; the engine calls them from full rechecks, not per keystroke.
pub trait DictionaryProvider {
    /// Whether `word` is accepted by this dictionary.
    fn check(&self, word: &str) -> bool;

    /// Ordered correction candidates for `word`, best first.
    ///
    /// The list is finite and may be empty.
    fn suggest(&self, word: &str) -> Vec<String>;

    /// Add `word` to the user's personal dictionary.
    fn learn_personal(&mut self, word: &str);

    /// Accept `word` for the remainder of this session only.
    fn learn_session(&mut self, word: &str);

    /// Record that the user corrected `old` to `new`, so future
    /// suggestions for `old` can rank `new` first.
    fn store_replacement(&mut self, old: &str, new: &str);

    /// The language tag this provider serves.
    fn describe(&self) -> LanguageTag;
}

/// Source of dictionary providers, keyed by language tag.
pub trait ProviderRegistry {
    /// Tags for which a provider can currently be requested.
    fn list_available_tags(&self) -> Vec<LanguageTag>;

    /// Acquire a provider for `tag`, or `None` if the tag has no backend.
    fn request_provider(&mut self, tag: &LanguageTag) -> Option<Box<dyn DictionaryProvider>>;

    /// Return a provider previously acquired from this registry.
    ///
    /// The engine releases every acquired provider exactly once, either on
    /// deactivation or on teardown.
    fn release_provider(&mut self, provider: Box<dyn DictionaryProvider>);
}

/// Application hook consulted before the built-in word check.
///
/// Lets an application accept words no dictionary knows (nicknames in a
/// chat client) or reject words every dictionary accepts. `Some(true)`
/// forces the word to be treated as misspelled, `Some(false)` forces it to
/// be treated as correct, and `None` defers to the default policy. A
/// `Some` verdict short-circuits the dictionary lookup entirely.
pub trait WordCheckOverride {
    fn check(&self, word: &str) -> Option<bool>;
}
