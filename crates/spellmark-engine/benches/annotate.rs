// Criterion benchmarks for spellmark-engine.
//
// Everything runs against an in-memory provider, so no external data is
// needed.
//
// Run:
//   cargo bench -p spellmark-engine

use criterion::{Criterion, criterion_group, criterion_main};

use spellmark_core::LanguageTag;
use spellmark_engine::{
    DictionaryProvider, ProviderRegistry, SpellEngine, TextBuffer,
};

// ---------------------------------------------------------------------------
// In-memory provider
// ---------------------------------------------------------------------------

struct SetProvider {
    tag: LanguageTag,
    words: std::collections::HashSet<String>,
}

impl DictionaryProvider for SetProvider {
    fn check(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn suggest(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }

    fn learn_personal(&mut self, word: &str) {
        self.words.insert(word.to_string());
    }

    fn learn_session(&mut self, word: &str) {
        self.words.insert(word.to_string());
    }

    fn store_replacement(&mut self, _old: &str, _new: &str) {}

    fn describe(&self) -> LanguageTag {
        self.tag.clone()
    }
}

struct SetRegistry {
    words: Vec<String>,
}

impl ProviderRegistry for SetRegistry {
    fn list_available_tags(&self) -> Vec<LanguageTag> {
        vec![LanguageTag::new("en")]
    }

    fn request_provider(&mut self, tag: &LanguageTag) -> Option<Box<dyn DictionaryProvider>> {
        (tag.as_str() == "en").then(|| {
            Box::new(SetProvider {
                tag: tag.clone(),
                words: self.words.iter().cloned().collect(),
            }) as Box<dyn DictionaryProvider>
        })
    }

    fn release_provider(&mut self, _provider: Box<dyn DictionaryProvider>) {}
}

/// A paragraph with a sprinkling of typos, repeated to a useful size.
fn sample_text() -> String {
    let sentence = "The quick brown fox jumps over the lazy dog while a \
                    smal crowd wacthes from the fence and aplauds politely. ";
    sentence.repeat(64)
}

fn sample_words() -> Vec<String> {
    [
        "The", "the", "quick", "brown", "fox", "jumps", "over", "lazy",
        "dog", "while", "a", "small", "crowd", "watches", "from", "fence",
        "and", "applauds", "politely",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_tokenize(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("tokenize_paragraph", |b| {
        b.iter(|| std::hint::black_box(spellmark_engine::tokenizer::tokenize(&text)));
    });
}

fn bench_recheck(c: &mut Criterion) {
    let text = sample_text();
    let registry = SetRegistry {
        words: sample_words(),
    };
    let mut engine = SpellEngine::new(Box::new(TextBuffer::new(text)), Box::new(registry));
    engine
        .activate_language(&LanguageTag::new("en"))
        .expect("en provider");

    c.bench_function("recheck_paragraph", |b| {
        b.iter(|| {
            engine.recheck();
            std::hint::black_box(engine.misspelled_ranges().len())
        });
    });
}

criterion_group!(benches, bench_tokenize, bench_recheck);
criterion_main!(benches);
