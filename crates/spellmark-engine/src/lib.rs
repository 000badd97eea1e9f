// spellmark-engine: the spell-annotation engine.
//
// The engine segments editable text into word spans, checks each span
// against the active dictionary providers, maintains the set of misspelled
// ranges, and applies targeted mutations (replace word, learn word, ignore
// for session) that keep cursor and range bookkeeping coherent.
//
// Everything here is single-threaded and synchronous: one engine instance
// owns its dictionary set, span cache and misspelling set, and every
// operation runs to completion on the calling thread. Callers that share
// an engine across threads must add their own synchronization.
//
// The UI side (drawing underlines, menus, pixel-to-offset mapping) is not
// part of this crate; it consumes the ranges and suggestion lists exposed
// by [`SpellEngine`].

pub mod dictionary;
pub mod engine;
pub mod provider;
pub mod text;
pub mod tokenizer;

pub use dictionary::DictionarySet;
pub use engine::SpellEngine;
pub use provider::{DictionaryProvider, ProviderRegistry, WordCheckOverride};
pub use text::{TextBuffer, TextSource};
