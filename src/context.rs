// src/context.rs
// Single source of truth for the compiled rule tables in hot paths.

use crate::rules::RuleSet;
use std::sync::Arc;

/// Runtime context passed to every cleaning stage.
///
/// Holds the process-wide, immutable rule tables. Cloning is one `Arc`
/// bump; stages never mutate it, so concurrent pipeline invocations need no
/// locking.
#[derive(Debug, Clone)]
pub struct Context {
    pub rules: Arc<RuleSet>,
}

impl Context {
    #[inline]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}
