//! Language tags passed to the dictionary

use std::fmt;
use std::str::FromStr;

/// A lowercase language tag such as `en` or `en-gb`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

/// Error type for malformed language tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageTagError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for LanguageTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Language tag must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Language tag contains invalid character '{c}'")
            }
        }
    }
}

impl std::error::Error for LanguageTagError {}

impl LanguageTag {
    /// Tag used when none is configured
    pub const DEFAULT: &'static str = "en";

    /// Create a language tag, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `LanguageTagError` if the tag is empty or contains anything
    /// other than ASCII letters, digits and `-`.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LanguageTag;
    ///
    /// let tag = LanguageTag::new("EN-gb").unwrap();
    /// assert_eq!(tag.as_str(), "en-gb");
    /// assert!(LanguageTag::new("").is_err());
    /// ```
    pub fn new(tag: &str) -> Result<Self, LanguageTagError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LanguageTagError::Empty);
        }

        if let Some(bad) = tag.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            return Err(LanguageTagError::InvalidCharacter(bad));
        }

        Ok(Self(tag.to_ascii_lowercase()))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for LanguageTag {
    type Err = LanguageTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageTag::default().as_str(), "en");
    }

    #[test]
    fn tag_is_lowercased_and_trimmed() {
        let tag = LanguageTag::new("  DE-at ").unwrap();
        assert_eq!(tag.as_str(), "de-at");
        assert_eq!(tag, "de-AT".parse::<LanguageTag>().unwrap());
    }

    #[test]
    fn invalid_tags_rejected() {
        assert_eq!(LanguageTag::new("   "), Err(LanguageTagError::Empty));
        assert_eq!(
            LanguageTag::new("en_us"),
            Err(LanguageTagError::InvalidCharacter('_'))
        );
    }
}
