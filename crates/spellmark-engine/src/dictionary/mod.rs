// Active dictionary management.
//
// A `DictionarySet` owns one provider per activated language, in
// activation order, together with the registry the providers came from.
// A word counts as correct only when every active provider accepts it:
// the set is an intersection of languages, not a union.

use spellmark_core::{LanguageTag, SpellError};

use crate::provider::{DictionaryProvider, ProviderRegistry};

struct ActiveDictionary {
    tag: LanguageTag,
    provider: Box<dyn DictionaryProvider>,
}

/// The set of currently active dictionary providers.
pub struct DictionarySet {
    registry: Box<dyn ProviderRegistry>,
    active: Vec<ActiveDictionary>,
}

impl DictionarySet {
    /// Create an empty set drawing providers from `registry`.
    pub fn new(registry: Box<dyn ProviderRegistry>) -> Self {
        Self {
            registry,
            active: Vec::new(),
        }
    }

    /// Tags for which the registry can supply a provider.
    pub fn available_tags(&self) -> Vec<LanguageTag> {
        self.registry.list_available_tags()
    }

    /// Activate `tag`, acquiring its provider from the registry.
    ///
    /// Activating an already-active tag is a no-op returning success.
    pub fn activate(&mut self, tag: &LanguageTag) -> Result<(), SpellError> {
        if self.is_active(tag) {
            return Ok(());
        }
        let provider = self
            .registry
            .request_provider(tag)
            .ok_or_else(|| SpellError::ProviderUnavailable(tag.clone()))?;
        self.active.push(ActiveDictionary {
            tag: tag.clone(),
            provider,
        });
        Ok(())
    }

    /// Deactivate one tag, or every active tag when `None`.
    ///
    /// Matching providers are released back to the registry. Nothing
    /// happens for a tag that is not active.
    pub fn deactivate(&mut self, tag: Option<&LanguageTag>) {
        match tag {
            Some(tag) => {
                if let Some(idx) = self.active.iter().position(|d| &d.tag == tag) {
                    let dict = self.active.remove(idx);
                    self.registry.release_provider(dict.provider);
                }
            }
            None => {
                for dict in self.active.drain(..) {
                    self.registry.release_provider(dict.provider);
                }
            }
        }
    }

    /// Deactivate everything, then activate each of `tags` in order.
    ///
    /// Stops at the first tag that has no provider; tags activated before
    /// the failure stay active and are not rolled back.
    pub fn activate_only(&mut self, tags: &[LanguageTag]) -> Result<(), SpellError> {
        self.deactivate(None);
        for tag in tags {
            self.activate(tag)?;
        }
        Ok(())
    }

    /// Whether `tag` is currently active.
    pub fn is_active(&self, tag: &LanguageTag) -> bool {
        self.active.iter().any(|d| &d.tag == tag)
    }

    /// Active tags in activation order.
    pub fn active_tags(&self) -> Vec<LanguageTag> {
        self.active.iter().map(|d| d.tag.clone()).collect()
    }

    /// Whether no dictionary is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of active dictionaries.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether every active provider accepts `word`.
    ///
    /// Returns `true` for an empty set; callers suppress checking in that
    /// case before ever asking.
    pub fn check(&self, word: &str) -> bool {
        self.active.iter().all(|d| d.provider.check(word))
    }

    /// The active providers in activation order.
    pub fn iter(&self) -> impl Iterator<Item = (&LanguageTag, &dyn DictionaryProvider)> {
        self.active.iter().map(|d| (&d.tag, d.provider.as_ref()))
    }

    /// Mutable access to the active providers in activation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&LanguageTag, &mut (dyn DictionaryProvider + 'static))> {
        self.active.iter_mut().map(|d| (&d.tag, d.provider.as_mut()))
    }

    /// Mutable access to the provider for `tag`, if active.
    pub fn provider_mut(&mut self, tag: &LanguageTag) -> Option<&mut (dyn DictionaryProvider + 'static)> {
        self.active
            .iter_mut()
            .find(|d| &d.tag == tag)
            .map(|d| d.provider.as_mut())
    }

    /// Mutable access to the first-activated provider.
    pub fn first_mut(&mut self) -> Option<&mut (dyn DictionaryProvider + 'static)> {
        self.active.first_mut().map(|d| d.provider.as_mut())
    }
}

impl Drop for DictionarySet {
    // Every acquired provider goes back to the registry exactly once.
    fn drop(&mut self) {
        self.deactivate(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared log of registry traffic so tests can observe acquisitions
    /// and releases after the set has taken ownership.
    #[derive(Default)]
    struct RegistryLog {
        requested: Vec<String>,
        released: Vec<String>,
    }

    struct StubProvider {
        tag: LanguageTag,
        words: Vec<String>,
    }

    impl DictionaryProvider for StubProvider {
        fn check(&self, word: &str) -> bool {
            self.words.iter().any(|w| w == word)
        }

        fn suggest(&self, _word: &str) -> Vec<String> {
            Vec::new()
        }

        fn learn_personal(&mut self, word: &str) {
            self.words.push(word.to_string());
        }

        fn learn_session(&mut self, word: &str) {
            self.words.push(word.to_string());
        }

        fn store_replacement(&mut self, _old: &str, _new: &str) {}

        fn describe(&self) -> LanguageTag {
            self.tag.clone()
        }
    }

    struct StubRegistry {
        available: Vec<(LanguageTag, Vec<String>)>,
        log: Rc<RefCell<RegistryLog>>,
    }

    impl StubRegistry {
        fn with_languages(langs: &[(&str, &[&str])]) -> (Self, Rc<RefCell<RegistryLog>>) {
            let log = Rc::new(RefCell::new(RegistryLog::default()));
            let available = langs
                .iter()
                .map(|(tag, words)| {
                    (
                        LanguageTag::new(*tag),
                        words.iter().map(|w| w.to_string()).collect(),
                    )
                })
                .collect();
            (
                Self {
                    available,
                    log: Rc::clone(&log),
                },
                log,
            )
        }
    }

    impl ProviderRegistry for StubRegistry {
        fn list_available_tags(&self) -> Vec<LanguageTag> {
            self.available.iter().map(|(t, _)| t.clone()).collect()
        }

        fn request_provider(&mut self, tag: &LanguageTag) -> Option<Box<dyn DictionaryProvider>> {
            let (_, words) = self.available.iter().find(|(t, _)| t == tag)?;
            self.log.borrow_mut().requested.push(tag.to_string());
            Some(Box::new(StubProvider {
                tag: tag.clone(),
                words: words.clone(),
            }))
        }

        fn release_provider(&mut self, provider: Box<dyn DictionaryProvider>) {
            self.log
                .borrow_mut()
                .released
                .push(provider.describe().to_string());
        }
    }

    fn set_with(langs: &[(&str, &[&str])]) -> (DictionarySet, Rc<RefCell<RegistryLog>>) {
        let (registry, log) = StubRegistry::with_languages(langs);
        (DictionarySet::new(Box::new(registry)), log)
    }

    #[test]
    fn activate_unknown_tag_fails() {
        let (mut set, _log) = set_with(&[("en", &["hello"])]);
        let err = set.activate(&LanguageTag::new("xx")).unwrap_err();
        assert_eq!(err, SpellError::ProviderUnavailable(LanguageTag::new("xx")));
        assert!(set.is_empty());
    }

    #[test]
    fn activate_is_idempotent() {
        let (mut set, log) = set_with(&[("en", &["hello"])]);
        set.activate(&LanguageTag::new("en")).unwrap();
        set.activate(&LanguageTag::new("en")).unwrap();
        assert_eq!(set.len(), 1);
        // The second activation never hit the registry.
        assert_eq!(log.borrow().requested, vec!["en"]);
    }

    #[test]
    fn active_tags_preserve_activation_order() {
        let (mut set, _log) = set_with(&[("en", &[]), ("fi", &[]), ("sv", &[])]);
        set.activate(&LanguageTag::new("sv")).unwrap();
        set.activate(&LanguageTag::new("en")).unwrap();
        assert_eq!(
            set.active_tags(),
            vec![LanguageTag::new("sv"), LanguageTag::new("en")]
        );
    }

    #[test]
    fn deactivate_one_releases_its_provider() {
        let (mut set, log) = set_with(&[("en", &[]), ("fi", &[])]);
        set.activate(&LanguageTag::new("en")).unwrap();
        set.activate(&LanguageTag::new("fi")).unwrap();
        set.deactivate(Some(&LanguageTag::new("en")));
        assert!(!set.is_active(&LanguageTag::new("en")));
        assert!(set.is_active(&LanguageTag::new("fi")));
        assert_eq!(log.borrow().released, vec!["en"]);
    }

    #[test]
    fn deactivate_all_releases_everything() {
        let (mut set, log) = set_with(&[("en", &[]), ("fi", &[])]);
        set.activate(&LanguageTag::new("en")).unwrap();
        set.activate(&LanguageTag::new("fi")).unwrap();
        set.deactivate(None);
        assert!(set.is_empty());
        assert_eq!(log.borrow().released, vec!["en", "fi"]);
    }

    #[test]
    fn deactivate_inactive_tag_is_a_noop() {
        let (mut set, log) = set_with(&[("en", &[])]);
        set.deactivate(Some(&LanguageTag::new("en")));
        assert!(log.borrow().released.is_empty());
    }

    #[test]
    fn activate_only_replaces_the_set() {
        let (mut set, _log) = set_with(&[("en", &[]), ("fi", &[]), ("sv", &[])]);
        set.activate(&LanguageTag::new("en")).unwrap();
        set.activate_only(&[LanguageTag::new("fi"), LanguageTag::new("sv")])
            .unwrap();
        assert_eq!(
            set.active_tags(),
            vec![LanguageTag::new("fi"), LanguageTag::new("sv")]
        );
    }

    #[test]
    fn activate_only_reports_first_failure_keeping_earlier_tags() {
        let (mut set, _log) = set_with(&[("en", &[]), ("fi", &[])]);
        let err = set
            .activate_only(&[
                LanguageTag::new("en"),
                LanguageTag::new("xx"),
                LanguageTag::new("fi"),
            ])
            .unwrap_err();
        assert_eq!(err, SpellError::ProviderUnavailable(LanguageTag::new("xx")));
        // "en" stays active, "fi" was never reached.
        assert_eq!(set.active_tags(), vec![LanguageTag::new("en")]);
    }

    #[test]
    fn check_is_an_and_across_providers() {
        let (mut set, _log) = set_with(&[("en", &["hello"]), ("fi", &["hei"])]);
        set.activate(&LanguageTag::new("en")).unwrap();
        set.activate(&LanguageTag::new("fi")).unwrap();
        // "hello" is only known to "en", so the intersection rejects it.
        assert!(!set.check("hello"));
        assert!(!set.check("hei"));
        set.deactivate(Some(&LanguageTag::new("fi")));
        assert!(set.check("hello"));
    }

    #[test]
    fn drop_releases_remaining_providers_once() {
        let (mut set, log) = set_with(&[("en", &[]), ("fi", &[])]);
        set.activate(&LanguageTag::new("en")).unwrap();
        set.activate(&LanguageTag::new("fi")).unwrap();
        set.deactivate(Some(&LanguageTag::new("fi")));
        drop(set);
        assert_eq!(log.borrow().released, vec!["fi", "en"]);
    }
}
