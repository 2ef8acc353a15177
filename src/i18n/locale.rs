//! Locale type: the two languages the site is published in.
//!
//! The site ships exactly two locales, so unlike an open-ended registry this is
//! a closed enum. Parsing is strict: anything that isn't a known code is an
//! error, which callers reading stored preferences treat as "no preference".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when turning a string into a [`Locale`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The value is not one of the supported locale codes.
    #[error("Unknown locale code: '{0}'")]
    Unknown(String),
}

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian, the default locale of the site markup.
    #[default]
    Ru,
    /// English.
    En,
}

impl Locale {
    /// All locales, in toggle order.
    pub const ALL: [Locale; 2] = [Locale::Ru, Locale::En];

    /// Create a Locale from its code.
    ///
    /// # Arguments
    /// * `code` - The locale code (`"ru"` or `"en"`), case-insensitive
    ///
    /// # Returns
    /// * `Ok(Locale)` for a known code
    /// * `Err(LocaleError::Unknown)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(LocaleError::Unknown(code.to_string())),
        }
    }

    /// The lowercase code stored in preferences (`"ru"`, `"en"`).
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// The uppercase short label shown on the language indicator.
    pub fn short_label(&self) -> &'static str {
        match self {
            Locale::Ru => "RU",
            Locale::En => "EN",
        }
    }

    /// The locale a toggle switches to.
    pub fn other(&self) -> Locale {
        match self {
            Locale::Ru => Locale::En,
            Locale::En => Locale::Ru,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}
