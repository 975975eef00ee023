use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::memchr2;
use std::borrow::Cow;

/// Delete every `<` and `>` character.
///
/// Neutralizes quoted-reply markers (`> le client a écrit`) and pseudo-HTML
/// left over from rich-text bodies before the whitespace rules run.
pub struct StripAngleBrackets;

impl Stage for StripAngleBrackets {
    fn name(&self) -> &'static str {
        "strip_angle_brackets"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr2(b'<', b'>', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if memchr2(b'<', b'>', text.as_bytes()).is_none() {
            return Ok(text);
        }
        Ok(Cow::Owned(
            text.chars().filter(|&c| c != '<' && c != '>').collect(),
        ))
    }
}
