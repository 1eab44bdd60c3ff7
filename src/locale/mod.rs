use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::PriceUnitError;

/// Language and optional country pair selecting regional conventions.
///
/// Accepts both `en-US` and `en_US` spellings and always displays as
/// `en_US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    pub fn new(language: &str, country: Option<&str>) -> Result<Self, PriceUnitError> {
        let language = language.trim();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(PriceUnitError::InvalidArgument(format!(
                "invalid language `{}`",
                language
            )));
        }
        let country = match country.map(str::trim) {
            None => None,
            Some(code) if is_country(code) => Some(code.to_ascii_uppercase()),
            Some(code) => {
                return Err(PriceUnitError::InvalidArgument(format!(
                    "invalid country `{}`",
                    code
                )))
            }
        };
        Ok(Self {
            language: language.to_ascii_lowercase(),
            country,
        })
    }

    pub fn us() -> Self {
        Self {
            language: "en".into(),
            country: Some("US".into()),
        }
    }

    pub fn korea() -> Self {
        Self {
            language: "ko".into(),
            country: Some("KR".into()),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

fn is_country(code: &str) -> bool {
    (code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()))
        || (code.len() == 3 && code.chars().all(|c| c.is_ascii_digit()))
}

impl FromStr for Locale {
    type Err = PriceUnitError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next();
        if parts.next().is_some() {
            return Err(PriceUnitError::InvalidArgument(format!(
                "unsupported locale tag `{}`",
                tag
            )));
        }
        Self::new(language, country)
    }
}

impl TryFrom<String> for Locale {
    type Error = PriceUnitError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}
