//! Language markers for multilingual vocabularies

use std::fmt;
use std::str::FromStr;

/// Languages with a marker token in the multilingual vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Polish,
    Turkish,
    Russian,
    Dutch,
    Czech,
    Arabic,
    Chinese,
    Japanese,
    Hungarian,
    Korean,
    Hindi,
}

/// Every supported language, in marker registration order.
pub const SUPPORTED_LANGUAGES: [Language; 17] = [
    Language::English,
    Language::German,
    Language::French,
    Language::Spanish,
    Language::Italian,
    Language::Portuguese,
    Language::Polish,
    Language::Turkish,
    Language::Russian,
    Language::Dutch,
    Language::Czech,
    Language::Arabic,
    Language::Chinese,
    Language::Japanese,
    Language::Hungarian,
    Language::Korean,
    Language::Hindi,
];

impl Language {
    /// Two-letter language code (`"en"`, `"de"`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Polish => "pl",
            Language::Turkish => "tr",
            Language::Russian => "ru",
            Language::Dutch => "nl",
            Language::Czech => "cs",
            Language::Arabic => "ar",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Hungarian => "hu",
            Language::Korean => "ko",
            Language::Hindi => "hi",
        }
    }

    /// Marker token prepended to the text (`"[EN]"`, `"[DE]"`, ...)
    pub fn marker(&self) -> &'static str {
        match self {
            Language::English => "[EN]",
            Language::German => "[DE]",
            Language::French => "[FR]",
            Language::Spanish => "[ES]",
            Language::Italian => "[IT]",
            Language::Portuguese => "[PT]",
            Language::Polish => "[PL]",
            Language::Turkish => "[TR]",
            Language::Russian => "[RU]",
            Language::Dutch => "[NL]",
            Language::Czech => "[CS]",
            Language::Arabic => "[AR]",
            Language::Chinese => "[ZH]",
            Language::Japanese => "[JA]",
            Language::Hungarian => "[HU]",
            Language::Korean => "[KO]",
            Language::Hindi => "[HI]",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Polish => "Polish",
            Language::Turkish => "Turkish",
            Language::Russian => "Russian",
            Language::Dutch => "Dutch",
            Language::Czech => "Czech",
            Language::Arabic => "Arabic",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Hungarian => "Hungarian",
            Language::Korean => "Korean",
            Language::Hindi => "Hindi",
        }
    }

    /// Look up a language by its code, ignoring case.
    ///
    /// Only codes are accepted here; this is the lookup the encoder uses.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_lowercase();
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
    }

    /// Comma-separated list of every supported code.
    pub fn supported_codes() -> String {
        SUPPORTED_LANGUAGES
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    /// Accepts either a code (`"de"`) or an English name (`"german"`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if let Some(lang) = Language::from_code(s) {
            return Ok(lang);
        }
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown language: {}. Supported: {}",
                    s,
                    Language::supported_codes()
                )
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
