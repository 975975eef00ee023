pub mod context;
pub mod epure;
pub mod flag;
pub mod header;
pub mod pipeline;
pub mod rules;
pub mod stage;
pub mod stem;

pub use epure::{Epure, EpureBuilder, EpureError, MISSING_FIELD};
pub use flag::{EMOJI_FLAG, FlagOptions, FlagRule, FlagRules, Selection};
pub use header::StripReplyMarkers;
pub use pipeline::Pipeline;
pub use rules::{CleaningRules, HeaderRules, RuleConfig, RuleError, RuleSet};
pub use stage::collapse_whitespace::CollapseWhitespace;
pub use stage::lower_case::LowerCase;
pub use stage::strip_accents::StripAccents;
pub use stage::strip_angle_brackets::StripAngleBrackets;
pub use stage::strip_apostrophes::StripApostrophes;
pub use stage::strip_line_breaks::StripLineBreaks;
pub use stage::{Stage, StageError};
pub use stem::{StemLanguage, Stemmer};
