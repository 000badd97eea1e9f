// Error taxonomy for the spell-annotation engine.

use crate::language::LanguageTag;

/// Errors surfaced by engine operations.
///
/// All failures are local: they are returned as values and leave the
/// engine state consistent. Having no active dictionaries is not an error
/// (checking is suppressed instead), and edit operations on a span that
/// does not resolve are harmless no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    /// No dictionary provider exists for the requested language tag.
    #[error("no dictionary provider available for language: {0}")]
    ProviderUnavailable(LanguageTag),
}
