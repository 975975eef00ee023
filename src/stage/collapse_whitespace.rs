use crate::{
    context::Context,
    rules::rewrite,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Collapse whitespace runs and separator clutter to single spaces.
///
/// Applies the cleaning rule table in order and trims the edges after
/// **each** individual rule, so trimming happens once per rule and later
/// rules must tolerate already-trimmed input. With the default table, tabs
/// become spaces first, then any run of two or more whitespace, `-` or `*`
/// characters collapses to one space:
///
/// ```rust
/// use epure::{CollapseWhitespace, Stage};
/// use epure::context::Context;
/// use std::borrow::Cow;
///
/// let ctx = Context::default();
/// let out = CollapseWhitespace
///     .apply(Cow::Borrowed("----- hello\tworld *****"), &ctx)
///     .unwrap();
/// assert_eq!(out, "hello world");
/// ```
pub struct CollapseWhitespace;

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_whitespace"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.is_empty())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;
        for rule in ctx.rules.cleaning.iter() {
            current = rewrite(&rule.pattern, current, &rule.replace);
            let trimmed = current.trim();
            if trimmed.len() != current.len() {
                let owned = trimmed.to_string();
                current = Cow::Owned(owned);
            }
        }
        Ok(current)
    }
}

// ============================================================================
// Tests
// ============================================================================
