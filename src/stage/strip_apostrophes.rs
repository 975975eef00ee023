use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr;
use std::borrow::Cow;

/// Replace apostrophes with spaces.
///
/// Not part of the canonical cleaner; useful in custom pipelines that want
/// French contractions split before tokenization (`l'heure` → `l heure`).
pub struct StripApostrophes;

impl Stage for StripApostrophes {
    fn name(&self) -> &'static str {
        "strip_apostrophes"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr(b'\'', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if memchr(b'\'', text.as_bytes()).is_none() {
            return Ok(text);
        }
        Ok(Cow::Owned(text.replace('\'', " ")))
    }
}
