//! Stemming seam.
//!
//! Stemming operates on already-tokenized text and sits outside the
//! cleaning control flow; this module only fixes the interface and the
//! supported language tags so backends stay interchangeable.

use phf::phf_map;

/// Languages a stemming backend must accept. `Porter` is the
/// language-agnostic Porter algorithm, kept as its own tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StemLanguage {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    #[default]
    French,
    German,
    Hungarian,
    Italian,
    Norwegian,
    Porter,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
}

static STEM_TAGS: phf::Map<&'static str, StemLanguage> = phf_map! {
    "arabic" => StemLanguage::Arabic,
    "danish" => StemLanguage::Danish,
    "dutch" => StemLanguage::Dutch,
    "english" => StemLanguage::English,
    "finnish" => StemLanguage::Finnish,
    "french" => StemLanguage::French,
    "german" => StemLanguage::German,
    "hungarian" => StemLanguage::Hungarian,
    "italian" => StemLanguage::Italian,
    "norwegian" => StemLanguage::Norwegian,
    "porter" => StemLanguage::Porter,
    "portuguese" => StemLanguage::Portuguese,
    "romanian" => StemLanguage::Romanian,
    "russian" => StemLanguage::Russian,
    "spanish" => StemLanguage::Spanish,
    "swedish" => StemLanguage::Swedish,
};

impl StemLanguage {
    /// Lowercase language tag, as accepted by [`StemLanguage::from_tag`].
    pub const fn tag(self) -> &'static str {
        match self {
            StemLanguage::Arabic => "arabic",
            StemLanguage::Danish => "danish",
            StemLanguage::Dutch => "dutch",
            StemLanguage::English => "english",
            StemLanguage::Finnish => "finnish",
            StemLanguage::French => "french",
            StemLanguage::German => "german",
            StemLanguage::Hungarian => "hungarian",
            StemLanguage::Italian => "italian",
            StemLanguage::Norwegian => "norwegian",
            StemLanguage::Porter => "porter",
            StemLanguage::Portuguese => "portuguese",
            StemLanguage::Romanian => "romanian",
            StemLanguage::Russian => "russian",
            StemLanguage::Spanish => "spanish",
            StemLanguage::Swedish => "swedish",
        }
    }

    /// Resolve a tag; unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        STEM_TAGS.get(tag).copied()
    }
}

/// A stemming backend: word tokens plus a language in, stemmed tokens out.
pub trait Stemmer: Send + Sync {
    fn stem(&self, tokens: &[String], language: StemLanguage) -> Vec<String>;
}
