//! Header-specific preprocessing.

use crate::{
    context::Context,
    rules::rewrite,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Strip transfer and reply markers (`RE:`, `TR:`, `Fwd:`, …) from header
/// text using the header rule table, in order, case-insensitively.
///
/// Must run BEFORE general cleaning: the marker patterns rely on the
/// original punctuation context (`Fwd:hello` → `hello` matches the literal
/// marker plus colon before any lowercasing or whitespace rule runs).
pub struct StripReplyMarkers;

impl Stage for StripReplyMarkers {
    fn name(&self) -> &'static str {
        "strip_reply_markers"
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(!text.is_empty())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;
        for rule in ctx.rules.header.iter() {
            current = rewrite(&rule.pattern, current, &rule.replace);
        }
        Ok(current)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(input: &str) -> String {
        StripReplyMarkers
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap()
            .into_owned()
    }

    #[test]
    fn reply_marker_removed_spacing_kept() {
        assert_eq!(strip("RE: hello world"), " hello world");
        assert_eq!(strip("re :"), "");
    }

    #[test]
    fn transfer_markers_removed() {
        assert_eq!(strip("TR: hello"), " hello");
        assert_eq!(strip("Fwd:hello"), "hello");
        assert_eq!(strip("Fw: hello"), " hello");
    }

    #[test]
    fn repeated_markers_all_removed() {
        assert_eq!(strip("Tr: Re: devis"), "  devis");
    }

    #[test]
    fn plain_headers_untouched() {
        assert_eq!(strip("hello "), "hello ");
        // `re` embedded in a word is not a marker.
        assert_eq!(strip("genre: comedie"), "genre: comedie");
    }
}
