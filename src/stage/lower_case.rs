use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Locale-independent Unicode lowercasing.
///
/// Runs first so that downstream flag patterns (written in lowercase form)
/// already match at the text level; flag matching itself stays
/// case-insensitive as a safety net.
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_empty() {
            return Ok(false);
        }
        if text.is_ascii() {
            return Ok(text.bytes().any(|b| b.is_ascii_uppercase()));
        }
        Ok(text.chars().any(char::is_uppercase))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if text.chars().any(char::is_uppercase) {
            Ok(Cow::Owned(text.to_lowercase()))
        } else {
            Ok(text)
        }
    }
}
