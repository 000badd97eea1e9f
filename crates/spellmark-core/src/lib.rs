// Shared types for the spellmark spell-annotation engine.
//
// This crate holds the data model used across the workspace: word spans,
// language tags, locale preference handling, and the error taxonomy. It has
// no knowledge of tokenization or dictionary backends.

pub mod error;
pub mod language;
pub mod span;

pub use error::SpellError;
pub use language::LanguageTag;
pub use span::WordSpan;
