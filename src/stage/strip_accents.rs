//! src/stage/strip_accents.rs
//!
//! Reduces accented characters to their ASCII base form.

use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use icu_normalizer::DecomposingNormalizerBorrowed;
use std::borrow::Cow;
use std::sync::LazyLock;

static NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfkd);

/// Strip accents and every other non-ASCII scalar from the text.
///
/// # Default mode
///
/// **NFKD (Compatibility Decomposition)** followed by dropping all
/// non-ASCII scalars:
/// - Precomposed letters reduce to their base letter: `é` → `e`
/// - Compatibility forms expand first: `ﬁ` → `fi`, `²` → `2`
/// - Characters with no ASCII decomposition are **dropped**, not replaced:
///   `æ` and emoji disappear entirely
///
/// # Extended mode
///
/// `extended = true` switches to full transliteration (`unidecode`):
/// ligatures expand (`æ` → `ae`, `œ` → `oe`) at a noticeably higher
/// per-call cost. Off by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripAccents {
    pub extended: bool,
}

impl Stage for StripAccents {
    fn name(&self) -> &'static str {
        "strip_accents"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.is_ascii())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if text.is_ascii() {
            return Ok(text);
        }
        if self.extended {
            return Ok(Cow::Owned(unidecode::unidecode(&text)));
        }
        let decomposed = NFKD.normalize(&text);
        Ok(Cow::Owned(
            decomposed.chars().filter(char::is_ascii).collect(),
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::default()
    }

    #[test]
    fn ascii_no_op() {
        let stage = StripAccents::default();
        assert!(!stage.needs_apply("hello world", &ctx()).unwrap());
        let out = stage.apply(Cow::Borrowed("hello"), &ctx()).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn french_accents_reduce_to_base_letters() {
        let stage = StripAccents::default();
        assert_eq!(stage.apply(Cow::Borrowed("éèëêàù"), &ctx()).unwrap(), "eeeeau");
        assert_eq!(
            stage.apply(Cow::Borrowed("numéro hâte déjà"), &ctx()).unwrap(),
            "numero hate deja"
        );
    }

    #[test]
    fn undecomposable_characters_are_dropped() {
        let stage = StripAccents::default();
        assert_eq!(stage.apply(Cow::Borrowed("ærienne"), &ctx()).unwrap(), "rienne");
        assert_eq!(stage.apply(Cow::Borrowed("a😊b"), &ctx()).unwrap(), "ab");
    }

    #[test]
    fn compatibility_forms_expand() {
        let stage = StripAccents::default();
        assert_eq!(stage.apply(Cow::Borrowed("ﬁche"), &ctx()).unwrap(), "fiche");
        assert_eq!(stage.apply(Cow::Borrowed("m²"), &ctx()).unwrap(), "m2");
    }

    #[test]
    fn extended_mode_expands_ligatures() {
        let stage = StripAccents { extended: true };
        assert_eq!(stage.apply(Cow::Borrowed("ærienne"), &ctx()).unwrap(), "aerienne");
        assert_eq!(stage.apply(Cow::Borrowed("cœur"), &ctx()).unwrap(), "coeur");
    }

    #[test]
    fn idempotency() {
        let stage = StripAccents::default();
        let once = stage.apply(Cow::Borrowed("Noël à l'École"), &ctx()).unwrap();
        let twice = stage.apply(Cow::Borrowed(&once), &ctx()).unwrap();
        assert_eq!(once, twice);
    }
}
