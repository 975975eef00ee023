//! Core cleaning stage abstraction.
//!
//! A stage is a stateless text-to-text transform. Pipelines call
//! `needs_apply` first as a cheap pre-check and skip the stage when it
//! returns false; `apply` must always be correct regardless. Stages return
//! `Cow::Borrowed` whenever the input is already in canonical form, so an
//! already-clean record flows through the whole pipeline without
//! allocating.

pub mod collapse_whitespace;
pub mod lower_case;
pub mod strip_accents;
pub mod strip_angle_brackets;
pub mod strip_apostrophes;
pub mod strip_line_breaks;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("cleaning failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single cleaning step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation.  Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
