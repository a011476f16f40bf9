use std::fmt;

/// Display language of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    Ru,
    #[default]
    Sk,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ru, Language::Sk, Language::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Sk => "sk",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Language {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Language::Ru),
            "sk" => Ok(Language::Sk),
            "en" => Ok(Language::En),
            other => Err(format!("{} is not a supported language", other)),
        }
    }
}
