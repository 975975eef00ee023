//! Entry points: the canonical text cleaner and the two field pipelines.

use thiserror::Error;

use crate::{
    context::Context,
    flag::FlagOptions,
    header::StripReplyMarkers,
    pipeline::Pipeline,
    rules::{RuleConfig, RuleError, RuleSet},
    stage::{
        Stage, StageError, collapse_whitespace::CollapseWhitespace, lower_case::LowerCase,
        strip_accents::StripAccents, strip_angle_brackets::StripAngleBrackets,
        strip_line_breaks::StripLineBreaks,
    },
};
use std::{borrow::Cow, sync::Arc};

/// Canonical textual form of a missing field, substituted before any
/// processing. Lowercase on purpose: it is already stable under the
/// cleaner, so body and header pipelines agree on absent input.
pub const MISSING_FIELD: &str = "none";

#[derive(Debug, Error)]
pub enum EpureError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("rule error: {0}")]
    Rules(#[from] RuleError),
}

/// The assembled engine: header normalizer, canonical text cleaner and flag
/// engine over one immutable rule set.
///
/// Construction is the only fallible step. A built `Epure` is `Send + Sync`
/// and every call is referentially transparent — same input text and
/// options, same output — so records can be processed in parallel without
/// locking.
pub struct Epure {
    ctx: Context,
    header: Pipeline,
    cleaner: Pipeline,
}

impl Epure {
    pub fn builder() -> EpureBuilder {
        EpureBuilder::default()
    }

    /// Canonical cleaning only, no flags: lowercase → strip accents →
    /// strip line breaks → strip angle brackets → collapse whitespace.
    /// The order is load-bearing: accents are gone before the whitespace
    /// rules run, and lowercasing precedes flagging so lowercase-form flag
    /// patterns match at the text level.
    pub fn clean_text(&self, text: &str) -> Result<String, EpureError> {
        let cleaned = self.cleaner.process(Cow::Borrowed(text), &self.ctx)?;
        Ok(cleaned.into_owned())
    }

    /// Body pipeline: cleaner → flag engine.
    ///
    /// `None` is coerced to [`MISSING_FIELD`] before processing.
    pub fn clean_body(
        &self,
        text: Option<&str>,
        options: &FlagOptions,
    ) -> Result<String, EpureError> {
        let text = text.unwrap_or(MISSING_FIELD);
        let cleaned = self.cleaner.process(Cow::Borrowed(text), &self.ctx)?;
        Ok(self.ctx.rules.flags.apply(&cleaned, options).into_owned())
    }

    /// Header pipeline: reply-marker stripping → cleaner → flag engine.
    ///
    /// `None` is coerced to [`MISSING_FIELD`] before processing.
    pub fn clean_header(
        &self,
        text: Option<&str>,
        options: &FlagOptions,
    ) -> Result<String, EpureError> {
        let text = text.unwrap_or(MISSING_FIELD);
        let stripped = self.header.process(Cow::Borrowed(text), &self.ctx)?;
        let cleaned = self.cleaner.process(stripped, &self.ctx)?;
        Ok(self.ctx.rules.flags.apply(&cleaned, options).into_owned())
    }

    /// The compiled rule tables backing this engine.
    pub fn rules(&self) -> &RuleSet {
        &self.ctx.rules
    }
}

pub struct EpureBuilder {
    config: RuleConfig,
    extended_transliteration: bool,
}

impl Default for EpureBuilder {
    fn default() -> Self {
        Self {
            config: RuleConfig::default(),
            extended_transliteration: false,
        }
    }
}

impl EpureBuilder {
    /// Replace the built-in rule tables.
    pub fn rules(mut self, config: RuleConfig) -> Self {
        self.config = config;
        self
    }

    /// Use full transliteration (`æ` → `ae`) instead of NFKD accent
    /// stripping. Slower; off by default.
    pub fn use_extended_transliteration(mut self, enabled: bool) -> Self {
        self.extended_transliteration = enabled;
        self
    }

    /// Compile the rule tables and assemble the pipelines. This is where
    /// configuration errors surface; per-record processing never fails on
    /// malformed input text.
    pub fn build(self) -> Result<Epure, EpureError> {
        let rules = self.config.compile()?;
        let ctx = Context::new(rules);
        let cleaner = Pipeline::new(vec![
            Arc::new(LowerCase) as Arc<dyn Stage>,
            Arc::new(StripAccents {
                extended: self.extended_transliteration,
            }),
            Arc::new(StripLineBreaks),
            Arc::new(StripAngleBrackets),
            Arc::new(CollapseWhitespace),
        ]);
        let header = Pipeline::new(vec![Arc::new(StripReplyMarkers) as Arc<dyn Stage>]);
        Ok(Epure {
            ctx,
            header,
            cleaner,
        })
    }
}
