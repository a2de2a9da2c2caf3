use serde::{Deserialize, Serialize};

/// Per-session configuration chosen when the game was created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<GameMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Lobby visibility. Stored under `private` for compatibility with existing records.
    #[serde(default, rename = "private", skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl GameOptions {
    pub fn is_public(&self) -> bool {
        matches!(self.visibility, Some(Visibility::Public))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameMode {
    Classic,
    Duet,
    /// Modes added after this build; kept verbatim.
    Other(String),
}

impl GameMode {
    pub fn as_str(&self) -> &str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Duet => "duet",
            GameMode::Other(raw) => raw,
        }
    }
}

impl From<String> for GameMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "classic" => GameMode::Classic,
            "duet" => GameMode::Duet,
            _ => GameMode::Other(raw),
        }
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        match mode {
            GameMode::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    En,
    Fr,
    De,
    Es,
    Other(String),
}

impl Language {
    pub fn as_str(&self) -> &str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::Other(raw) => raw,
        }
    }
}

impl From<String> for Language {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "en" => Language::En,
            "fr" => Language::Fr,
            "de" => Language::De,
            "es" => Language::Es,
            _ => Language::Other(raw),
        }
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        match language {
            Language::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Visibility {
    Public,
    Private,
    /// Anything else is treated as not public.
    Other(String),
}

impl Visibility {
    pub fn as_str(&self) -> &str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Other(raw) => raw,
        }
    }
}

impl From<String> for Visibility {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "public" => Visibility::Public,
            "private" => Visibility::Private,
            _ => Visibility::Other(raw),
        }
    }
}

impl From<Visibility> for String {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
