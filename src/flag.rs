//! The flag engine: ordered, filtered placeholder substitution.
//!
//! Sensitive or high-variance substrings (phone numbers, amounts, dates,
//! addresses, …) are replaced by stable placeholder tokens so downstream
//! classifiers see one vocabulary item per category instead of an unbounded
//! surface-form space.
//!
//! Substitution is sequential and in-place: every rule rewrites the output
//! of the rule before it, so a pattern earlier in the table wins on
//! overlapping spans because it consumes the text first. The table order is
//! therefore part of the configuration contract, not an implementation
//! detail.

use crate::rules::{RuleError, rewrite};
use log::debug;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Placeholder labels of the built-in flag table. Every label carries one
/// leading and one trailing space so it stays a separable token inside
/// whitespace-tokenized text regardless of adjacent punctuation.
pub const FLAG_CONS: &str = " flag_cons_ ";
pub const FLAG_MAIL: &str = " flag_mail_ ";
pub const FLAG_URL: &str = " flag_url_ ";
pub const FLAG_PHONE: &str = " flag_phone_ ";
pub const FLAG_IMMAT: &str = " flag_immat_ ";
pub const FLAG_AMOUNT: &str = " flag_amount_ ";
pub const FLAG_CP: &str = " flag_cp_ ";
pub const FLAG_TIME: &str = " flag_time_ ";
pub const FLAG_DATE: &str = " flag_date_ ";
pub const FLAG_MENTION: &str = " flag_mention_ ";
pub const FLAG_HASHTAG: &str = " flag_hashtag_ ";

/// Placeholder substituted by the emoji pass. Not part of the flag table:
/// emoji flagging has its own toggle and ignores the selection.
pub const EMOJI_FLAG: &str = " flag_emoji_ ";

/// Precompiled emoji matcher: the emoji blocks plus regional-indicator
/// pairs, with ZWJ, variation selectors and skin-tone modifiers folded into
/// the run so a multi-codepoint emoji collapses to a single placeholder.
static EMOJI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(?:[\u{1F1E6}-\u{1F1FF}]{2})|\
         (?:[\u{2600}-\u{27BF}\u{2190}-\u{21FF}\u{2B00}-\u{2BFF}\
         \u{1F300}-\u{1F5FF}\u{1F600}-\u{1F64F}\u{1F680}-\u{1F6FF}\
         \u{1F700}-\u{1F77F}\u{1F900}-\u{1F9FF}\u{1FA00}-\u{1FAFF}\
         \u{1F3FB}-\u{1F3FF}\u{FE0F}\u{200D}]+)",
    )
    .expect("emoji pattern failed to compile - this is a bug")
});

/// Which flag labels apply on a given call.
///
/// `Unfiltered` applies the full table. `AllowList` applies only the listed
/// labels; `DenyList` applies everything except the listed labels. Labels
/// not present in the table are accepted silently. An empty `AllowList`
/// activates no rules at all — it is not the same thing as `Unfiltered`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unfiltered,
    AllowList(HashSet<String>),
    DenyList(HashSet<String>),
}

impl Selection {
    /// Build an allow-list from anything yielding label strings.
    pub fn allow<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::AllowList(labels.into_iter().map(Into::into).collect())
    }

    /// Build a deny-list from anything yielding label strings.
    pub fn deny<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::DenyList(labels.into_iter().map(Into::into).collect())
    }

    /// Whether a rule carrying `label` is active under this selection.
    #[inline]
    pub fn allows(&self, label: &str) -> bool {
        match self {
            Selection::Unfiltered => true,
            Selection::AllowList(set) => set.contains(label),
            Selection::DenyList(set) => !set.contains(label),
        }
    }
}

/// Per-call flagging options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOptions {
    /// Master switch: when false the input is returned untouched, emoji
    /// pass included.
    pub enabled: bool,

    pub selection: Selection,

    /// Separate toggle for the emoji pass. Substantially more expensive per
    /// call than the other rules; off by default.
    pub flag_emojis: bool,
}

impl Default for FlagOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            selection: Selection::Unfiltered,
            flag_emojis: false,
        }
    }
}

impl FlagOptions {
    /// Full table, no emoji pass — the common configuration.
    pub fn full() -> Self {
        Self::default()
    }

    /// No flagging at all.
    pub fn off() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_selection(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn flag_emojis(mut self, enabled: bool) -> Self {
        self.flag_emojis = enabled;
        self
    }
}

/// One compiled flag rule.
#[derive(Debug, Clone)]
pub struct FlagRule {
    pub pattern: Regex,
    pub label: String,
}

/// The ordered flag table.
#[derive(Debug, Clone)]
pub struct FlagRules {
    rules: Vec<FlagRule>,
    labels: Vec<String>,
}

impl FlagRules {
    /// Compile a flag table. Patterns are matched case-insensitively as a
    /// safety net even though the cleaner lowercases body text first: the
    /// engine is also used on raw, uncleaned text.
    pub fn compile(pairs: &[(String, String)], labels: &[String]) -> Result<Self, RuleError> {
        let mut rules = Vec::with_capacity(pairs.len());
        for (pattern, label) in pairs {
            if label.trim().is_empty() {
                return Err(RuleError::EmptyLabel(pattern.clone()));
            }
            let compiled = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| RuleError::InvalidPattern {
                    table: "flag",
                    pattern: pattern.clone(),
                    source,
                })?;
            rules.push(FlagRule {
                pattern: compiled,
                label: label.clone(),
            });
        }
        debug!("compiled {} flag rules", rules.len());
        Ok(Self {
            rules,
            labels: labels.to_vec(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlagRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The recognized label list (emoji excluded).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Apply the table to `text` under `options`.
    ///
    /// Rules run in insertion order; each active rule performs a global
    /// leftmost substitution on the current text before the next rule runs.
    /// The emoji pass, when enabled, always runs last and is never gated by
    /// the selection. Empty input yields empty output.
    pub fn apply<'a>(&self, text: &'a str, options: &FlagOptions) -> Cow<'a, str> {
        if !options.enabled {
            return Cow::Borrowed(text);
        }
        let mut current = Cow::Borrowed(text);
        for rule in &self.rules {
            if !options.selection.allows(&rule.label) {
                continue;
            }
            current = rewrite(&rule.pattern, current, &rule.label);
        }
        if options.flag_emojis {
            current = rewrite(&EMOJI_PATTERN, current, EMOJI_FLAG);
        }
        current
    }
}

// ============================================================================
// Tests
// ============================================================================
