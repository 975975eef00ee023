//! Rule tables: raw configuration in, compiled immutable rule sets out.
//!
//! All three tables are ordered and order is part of the configuration
//! contract: every rule rewrites the output of the rule before it. Tables
//! are compiled once at startup and never mutated afterwards, so a built
//! [`RuleSet`] can be shared freely across threads.

use crate::flag::{
    FLAG_AMOUNT, FLAG_CONS, FLAG_CP, FLAG_DATE, FLAG_HASHTAG, FLAG_IMMAT, FLAG_MAIL, FLAG_MENTION,
    FLAG_PHONE, FLAG_TIME, FLAG_URL, FlagRules,
};
use log::debug;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::borrow::Cow;
use thiserror::Error;

/// Configuration-time failure. Surfaced once when a table is compiled,
/// never during per-record processing.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}` in {table} table: {source}")]
    InvalidPattern {
        table: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("empty label for pattern `{0}` in flag table")]
    EmptyLabel(String),
}

/// One compiled substitution rule.
#[derive(Debug, Clone)]
pub struct SubstRule {
    pub pattern: Regex,
    pub replace: String,
}

/// Global leftmost substitution that stays `Cow::Borrowed` when nothing
/// matched.
pub(crate) fn rewrite<'a>(pattern: &Regex, text: Cow<'a, str>, replacement: &str) -> Cow<'a, str> {
    let replaced = match pattern.replace_all(&text, replacement) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match replaced {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}

fn compile_table(
    table: &'static str,
    pairs: &[(String, String)],
    case_insensitive: bool,
) -> Result<Vec<SubstRule>, RuleError> {
    let mut rules = Vec::with_capacity(pairs.len());
    for (pattern, replace) in pairs {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| RuleError::InvalidPattern {
                table,
                pattern: pattern.clone(),
                source,
            })?;
        rules.push(SubstRule {
            pattern: compiled,
            replace: replace.clone(),
        });
    }
    debug!("compiled {} {table} rules", rules.len());
    Ok(rules)
}

/// Ordered whitespace/separator collapsing rules. Each entry replaces its
/// matches with the configured replacement (a single space in the default
/// table); the edges are trimmed after every individual rule application.
#[derive(Debug, Clone)]
pub struct CleaningRules(Vec<SubstRule>);

impl CleaningRules {
    pub fn compile(pairs: &[(String, String)]) -> Result<Self, RuleError> {
        Ok(Self(compile_table("cleaning", pairs, false)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubstRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered reply/forward marker removal rules, matched case-insensitively
/// against the original header text (before any cleaning).
#[derive(Debug, Clone)]
pub struct HeaderRules(Vec<SubstRule>);

impl HeaderRules {
    pub fn compile(pairs: &[(String, String)]) -> Result<Self, RuleError> {
        Ok(Self(compile_table("header", pairs, true)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubstRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The three immutable tables consumed by the pipelines.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub cleaning: CleaningRules,
    pub header: HeaderRules,
    pub flags: FlagRules,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleConfig::default()
            .compile()
            .expect("default rule tables failed to compile - this is a bug")
    }
}

/// Structured rule definition, deserializable from any serde format.
///
/// Tables are ordered lists of `(pattern, replacement-or-label)` pairs;
/// insertion order is the application order. Replacement strings follow the
/// `regex` crate replacement syntax, so a literal `$` must be written `$$`.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub cleaning: Vec<(String, String)>,
    pub header: Vec<(String, String)>,
    pub flags: Vec<(String, String)>,
    /// Recognized flag labels. The emoji label is not listed here: the
    /// emoji pass has its own toggle and never participates in selection.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl RuleConfig {
    /// Compile every table. This is the single place configuration errors
    /// surface; a malformed pattern is fatal here and unreachable later.
    pub fn compile(self) -> Result<RuleSet, RuleError> {
        Ok(RuleSet {
            cleaning: CleaningRules::compile(&self.cleaning)?,
            header: HeaderRules::compile(&self.header)?,
            flags: FlagRules::compile(&self.flags, &self.labels)?,
        })
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        let pair = |p: &str, r: &str| (p.to_string(), r.to_string());
        Self {
            cleaning: vec![pair(r"\t", " "), pair(r"[\s\-\*]{2,}", " ")],
            header: vec![
                pair(r"\bre\s*:", ""),
                pair(r"\btr\s*:", ""),
                pair(r"\bfwd?\s*:", ""),
            ],
            flags: vec![
                pair(r"\b\d{7,9}\b", FLAG_CONS),
                pair(r"[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}", FLAG_MAIL),
                pair(r"(?:https?://|www\.)\S+", FLAG_URL),
                pair(r"(?:\+33\s?|0033\s?|0)[1-9](?:[\s.\-]?\d{2}){4}", FLAG_PHONE),
                pair(r"\b[a-z]{2}[\s\-]?\d{3}[\s\-]?[a-z]{2}\b", FLAG_IMMAT),
                pair(
                    r"\d+(?:[.,]\d+)?\s?(?:€|\$|£|euros?|eur\b|dollars?|usd\b)",
                    FLAG_AMOUNT,
                ),
                pair(r"\b\d{5}(?:\s|$)", FLAG_CP),
                pair(r"\b\d{1,2}\s?h\s?(?:\d{2})?\b|\b\d{1,2}:\d{2}\b", FLAG_TIME),
                pair(
                    r"\b\d{1,2}(?:er)?\s?(?:janvier|f[ée]vrier|mars|avril|mai|juin|juillet|ao[ûu]t|septembre|octobre|novembre|d[ée]cembre)\s?(?:\d{2,4})?|\b\d{1,2}[/.\-]\d{1,2}(?:[/.\-]\d{2,4})?\b",
                    FLAG_DATE,
                ),
                pair(r"@\w+", FLAG_MENTION),
                pair(r"#\w+", FLAG_HASHTAG),
            ],
            labels: vec![
                FLAG_CONS.to_string(),
                FLAG_MAIL.to_string(),
                FLAG_URL.to_string(),
                FLAG_PHONE.to_string(),
                FLAG_IMMAT.to_string(),
                FLAG_AMOUNT.to_string(),
                FLAG_CP.to_string(),
                FLAG_TIME.to_string(),
                FLAG_DATE.to_string(),
                FLAG_MENTION.to_string(),
                FLAG_HASHTAG.to_string(),
            ],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_compile() {
        let rules = RuleConfig::default().compile().unwrap();
        assert_eq!(rules.cleaning.len(), 2);
        assert_eq!(rules.header.len(), 3);
        assert_eq!(rules.flags.len(), 11);
        assert_eq!(rules.flags.labels().len(), 11);
    }

    #[test]
    fn malformed_pattern_is_a_load_error() {
        let mut config = RuleConfig::default();
        config.flags.push(("(unclosed".to_string(), " flag_x_ ".to_string()));
        let err = config.compile().unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { table: "flag", .. }));
    }

    #[test]
    fn malformed_cleaning_pattern_names_its_table() {
        let mut config = RuleConfig::default();
        config.cleaning.insert(0, ("[".to_string(), " ".to_string()));
        let err = config.compile().unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { table: "cleaning", .. }));
    }

    #[test]
    fn rewrite_is_zero_copy_on_no_match() {
        let re = Regex::new(r"\d+").unwrap();
        let out = rewrite(&re, Cow::Borrowed("no digits here"), "N");
        assert!(matches!(out, Cow::Borrowed(_)));
        let out = rewrite(&re, Cow::Borrowed("room 101"), "N");
        assert_eq!(out, "room N");
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{
            "cleaning": [["\\t", " "]],
            "header": [["\\bre\\s*:", ""]],
            "flags": [["\\d+", " flag_num_ "]],
            "labels": [" flag_num_ "]
        }"#;
        let config: RuleConfig = serde_json::from_str(json).unwrap();
        let rules = config.compile().unwrap();
        assert_eq!(rules.flags.len(), 1);
    }
}
