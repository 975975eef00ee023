use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr;
use std::borrow::Cow;

/// Delete line feeds outright — no replacement with a space.
///
/// Only `\n` is a line break here; a stray `\r` is left for the whitespace
/// rules to pick up when it sits next to other collapsible characters.
pub struct StripLineBreaks;

impl Stage for StripLineBreaks {
    fn name(&self) -> &'static str {
        "strip_line_breaks"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr(b'\n', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if memchr(b'\n', text.as_bytes()).is_none() {
            return Ok(text);
        }
        Ok(Cow::Owned(text.chars().filter(|&c| c != '\n').collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_lines_without_inserting_spaces() {
        let ctx = Context::default();
        assert_eq!(
            StripLineBreaks.apply(Cow::Borrowed("bon\njour"), &ctx).unwrap(),
            "bonjour"
        );
        assert_eq!(
            StripLineBreaks.apply(Cow::Borrowed("a\r\nb"), &ctx).unwrap(),
            "a\rb"
        );
    }

    #[test]
    fn zero_copy_without_line_breaks() {
        let ctx = Context::default();
        assert!(!StripLineBreaks.needs_apply("une ligne", &ctx).unwrap());
        let out = StripLineBreaks.apply(Cow::Borrowed("une ligne"), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
