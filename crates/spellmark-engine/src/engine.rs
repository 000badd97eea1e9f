// SpellEngine: top-level integration point for spell annotation.
//
// Owns the text source, the active dictionary set, the optional word-check
// override and the derived state (cached snapshot, word spans, misspelling
// set) and provides a unified API for language management, rechecking,
// word lookup and the edit operations.
//
// Design notes:
// - Derived state is replaced wholesale: every refresh re-pulls the
//   snapshot, retokenizes and rebuilds the misspelling set. Nothing is
//   patched in place, so stale spans cannot outlive the text they were
//   computed from.
// - The misspelling set always holds exact elements of the current span
//   list.
// - Checking is suppressed, not failed, while checking is disabled or no
//   dictionary is active.

use spellmark_core::language::preferred_tags;
use spellmark_core::{LanguageTag, SpellError, WordSpan};

use crate::dictionary::DictionarySet;
use crate::provider::{ProviderRegistry, WordCheckOverride};
use crate::text::TextSource;
use crate::tokenizer;

/// Top-level handle that owns the annotation state for one text.
pub struct SpellEngine {
    /// The editable text this engine annotates.
    text: Box<dyn TextSource>,

    /// Active dictionaries, in activation order.
    dictionaries: DictionarySet,

    /// Optional application hook that can out-vote the dictionaries.
    word_check: Option<Box<dyn WordCheckOverride>>,

    /// Whether spell checking is enabled.
    checking: bool,

    /// The text the current spans were derived from.
    snapshot: String,

    /// Word spans of `snapshot`, in text order.
    words: Vec<WordSpan>,

    /// Spans of `words` that failed the word check.
    misspelled: Vec<WordSpan>,
}

impl SpellEngine {
    /// Create an engine over `text`, drawing dictionaries from `registry`.
    ///
    /// Checking starts enabled, but nothing is flagged until a language is
    /// activated.
    pub fn new(text: Box<dyn TextSource>, registry: Box<dyn ProviderRegistry>) -> Self {
        let mut engine = Self {
            text,
            dictionaries: DictionarySet::new(registry),
            word_check: None,
            checking: true,
            snapshot: String::new(),
            words: Vec::new(),
            misspelled: Vec::new(),
        };
        engine.retokenize();
        engine
    }

    /// Install or remove the word-check override, then recheck.
    pub fn set_word_check(&mut self, hook: Option<Box<dyn WordCheckOverride>>) {
        self.word_check = hook;
        self.recheck();
    }

    // =========================================================================
    // Language management
    // =========================================================================

    /// Activate spell checking for `lang`.
    pub fn activate_language(&mut self, lang: &LanguageTag) -> Result<(), SpellError> {
        self.dictionaries.activate(lang)?;
        self.refresh();
        Ok(())
    }

    /// Deactivate one language, or every active language when `None`.
    pub fn deactivate_language(&mut self, lang: Option<&LanguageTag>) {
        self.dictionaries.deactivate(lang);
        self.after_deactivation();
    }

    /// Activate exactly the languages in `langs`, deactivating the rest.
    ///
    /// On failure the first failing tag is reported; tags activated before
    /// it stay active. Callers needing atomicity must snapshot and restore
    /// the active list themselves.
    pub fn set_active_languages(&mut self, langs: &[LanguageTag]) -> Result<(), SpellError> {
        let result = self.dictionaries.activate_only(langs);
        self.after_deactivation();
        result
    }

    /// Active languages in activation order.
    pub fn active_languages(&self) -> Vec<LanguageTag> {
        self.dictionaries.active_tags()
    }

    /// Whether `lang` is currently active.
    pub fn is_language_active(&self, lang: &LanguageTag) -> bool {
        self.dictionaries.is_active(lang)
    }

    /// Languages the registry can supply a dictionary for.
    pub fn available_languages(&self) -> Vec<LanguageTag> {
        self.dictionaries.available_tags()
    }

    /// Activate the languages named by the `LANGUAGE` and `LANG`
    /// environment variables, falling back to `en` if none of them has a
    /// dictionary.
    pub fn activate_default_languages(&mut self) {
        let mut prefs: Vec<String> = Vec::new();
        if let Ok(language) = std::env::var("LANGUAGE") {
            prefs.extend(language.split(':').map(str::to_string));
        }
        if let Ok(lang) = std::env::var("LANG") {
            prefs.push(lang);
        }
        let prefs: Vec<&str> = prefs.iter().map(String::as_str).collect();
        self.activate_preferred(&prefs);
    }

    /// Activate every preference-list candidate the registry can serve.
    ///
    /// Candidates are derived with [`preferred_tags`]; if none of them has
    /// a dictionary, `en` is activated unconditionally as a last resort.
    pub fn activate_preferred(&mut self, prefs: &[&str]) {
        let available = self.dictionaries.available_tags();
        for tag in preferred_tags(prefs) {
            if available.contains(&tag) {
                let _ = self.dictionaries.activate(&tag);
            }
        }
        if self.dictionaries.is_empty() {
            let _ = self.dictionaries.activate(&LanguageTag::new("en"));
        }
        self.refresh();
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Enable or disable spell checking.
    ///
    /// Disabling clears the misspelling set immediately; enabling triggers
    /// a fresh recheck.
    pub fn set_checking_enabled(&mut self, enabled: bool) {
        if self.checking == enabled {
            return;
        }
        self.checking = enabled;
        if enabled {
            self.refresh();
        } else {
            self.misspelled.clear();
        }
    }

    /// Whether spell checking is enabled.
    pub fn is_checking_enabled(&self) -> bool {
        self.checking
    }

    /// Whether `word` passes the word check.
    ///
    /// The override hook wins when it has an opinion. Otherwise a token
    /// that does not start with an alphabetic character is always correct,
    /// and an alphabetic word must be accepted by every active dictionary.
    pub fn is_word_correct(&self, word: &str) -> bool {
        if let Some(hook) = &self.word_check {
            if let Some(misspelled) = hook.check(word) {
                return !misspelled;
            }
        }
        if !word.chars().next().is_some_and(char::is_alphabetic) {
            return true;
        }
        self.dictionaries.check(word)
    }

    /// Rebuild the misspelling set from the current word spans.
    ///
    /// Suppressed (the previous set is kept) while checking is disabled or
    /// no dictionary is active.
    pub fn recheck(&mut self) {
        if !self.checking || self.dictionaries.is_empty() {
            return;
        }
        let misspelled: Vec<WordSpan> = self
            .words
            .iter()
            .filter(|span| !span.is_empty() && !self.is_word_correct(&span.text))
            .cloned()
            .collect();
        self.misspelled = misspelled;
    }

    /// Notify the engine that the underlying text changed.
    ///
    /// Pulls a fresh snapshot, retokenizes and rechecks.
    pub fn text_changed(&mut self) {
        self.refresh();
    }

    /// The currently flagged spans, in text order.
    pub fn misspelled_ranges(&self) -> &[WordSpan] {
        &self.misspelled
    }

    /// All word spans of the current snapshot, in text order.
    pub fn word_spans(&self) -> &[WordSpan] {
        &self.words
    }

    /// The text snapshot the current spans were derived from.
    pub fn text(&self) -> &str {
        &self.snapshot
    }

    // =========================================================================
    // Word lookup and edit operations
    // =========================================================================

    /// The word span enclosing the codepoint offset `position`.
    ///
    /// Returns `None` on whitespace or punctuation, and when `position`
    /// lies beyond the end of the text.
    pub fn word_at(&self, position: usize) -> Option<WordSpan> {
        tokenizer::word_at(&self.words, &self.snapshot, position).cloned()
    }

    /// Correction candidates for the word in `span`, one entry per active
    /// dictionary in activation order.
    pub fn suggestions(&self, span: &WordSpan) -> Vec<(LanguageTag, Vec<String>)> {
        if span.is_empty() {
            return Vec::new();
        }
        self.dictionaries
            .iter()
            .map(|(tag, provider)| (tag.clone(), provider.suggest(&span.text)))
            .collect()
    }

    /// Add the word in `span` to a personal dictionary, then recheck.
    ///
    /// `lang` selects the receiving dictionary; `None` targets the first
    /// active one. An unresolved span or an inactive tag makes this a
    /// harmless no-op.
    pub fn add_to_personal(&mut self, span: &WordSpan, lang: Option<&LanguageTag>) {
        if span.is_empty() {
            return;
        }
        let provider = match lang {
            Some(lang) => self.dictionaries.provider_mut(lang),
            None => self.dictionaries.first_mut(),
        };
        let Some(provider) = provider else {
            return;
        };
        provider.learn_personal(&span.text);
        self.refresh();
    }

    /// Accept the word in `span` for this session, then recheck.
    ///
    /// The word is learned by every active dictionary, so it stays
    /// unflagged no matter which one would otherwise reject it.
    pub fn ignore_session(&mut self, span: &WordSpan) {
        if span.is_empty() {
            return;
        }
        for (_, provider) in self.dictionaries.iter_mut() {
            provider.learn_session(&span.text);
        }
        self.refresh();
    }

    /// Replace the word in `span` with `replacement`, then recheck.
    ///
    /// Cursor rules: a cursor at end-of-text stays at end-of-text; a
    /// cursor inside the replaced word lands at the word's start; any
    /// other cursor is left for the text source to translate. The
    /// replacement is recorded on every active dictionary that rejects the
    /// old word, for suggestion ranking.
    pub fn replace_word(&mut self, span: &WordSpan, replacement: &str) {
        // A span from a stale snapshot cannot be applied to the text.
        if span.is_empty() || span.end > self.snapshot.len() {
            return;
        }

        let cursor = self.text.cursor_position();
        let at_end = cursor == self.text.current_text().len();

        for (_, provider) in self.dictionaries.iter_mut() {
            if !provider.check(&span.text) {
                provider.store_replacement(&span.text, replacement);
            }
        }

        self.text.replace_range(span.start, span.end, replacement);

        if at_end {
            let end = self.text.current_text().len();
            self.text.set_cursor_position(end);
        } else if cursor > span.start && cursor <= span.end {
            self.text.set_cursor_position(span.start);
        }

        self.refresh();
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Pull a fresh snapshot and recompute the span list.
    fn retokenize(&mut self) {
        self.snapshot = self.text.current_text();
        self.words = tokenizer::tokenize(&self.snapshot);
    }

    fn refresh(&mut self) {
        self.retokenize();
        self.recheck();
    }

    /// Shared tail of the deactivation paths. `recheck` suppresses itself
    /// with zero dictionaries, so the last deactivation clears the set
    /// here instead of leaving stale ranges behind.
    fn after_deactivation(&mut self) {
        if self.dictionaries.is_empty() {
            self.misspelled.clear();
            self.retokenize();
        } else {
            self.refresh();
        }
    }
}
