// ABOUTME: Phrase lexicon used by the scoring engine for keyword and phrase matching
// ABOUTME: Maps each phrase category to lowercase phrases with defaults and file overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Category of phrases the engine matches against message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCategory {
    /// Stock phrases showing the agent could not help
    Fallback,
    /// Positive sentiment markers in human messages
    Positive,
    /// Negative sentiment markers in human messages
    Negative,
    /// Empathetic phrasing by the agent
    Empathy,
    /// Informal words that cost professionalism
    Informal,
    /// Closure indicators in the final human message
    Closure,
    /// Requests for a human or a superior
    Escalation,
    /// Hedging words that lower accuracy
    Hedging,
    /// Confidence words that raise accuracy
    Confidence,
}

impl PhraseCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 9] = [
        Self::Fallback,
        Self::Positive,
        Self::Negative,
        Self::Empathy,
        Self::Informal,
        Self::Closure,
        Self::Escalation,
        Self::Hedging,
        Self::Confidence,
    ];

    /// Configuration key of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Empathy => "empathy",
            Self::Informal => "informal",
            Self::Closure => "closure",
            Self::Escalation => "escalation",
            Self::Hedging => "hedging",
            Self::Confidence => "confidence",
        }
    }

    /// Built-in phrases of the category
    #[must_use]
    pub const fn default_phrases(self) -> &'static [&'static str] {
        match self {
            Self::Fallback => &[
                "i don't know",
                "i'm not sure",
                "i can't help",
                "unable to assist",
                "don't have information",
                "not certain",
                "apologize",
            ],
            Self::Positive => &[
                "good",
                "great",
                "excellent",
                "amazing",
                "perfect",
                "wonderful",
                "thanks",
                "thank you",
                "helpful",
                "appreciate",
                "love",
                "best",
            ],
            Self::Negative => &[
                "bad",
                "terrible",
                "worst",
                "horrible",
                "awful",
                "disappointed",
                "frustrated",
                "angry",
                "upset",
                "annoyed",
                "useless",
                "waste",
            ],
            Self::Empathy => &[
                "understand",
                "sorry",
                "apologize",
                "appreciate",
                "frustrating",
                "help you",
                "here for you",
                "i see",
                "that must",
            ],
            Self::Informal => &["gonna", "wanna", "yeah", "nope", "dunno"],
            Self::Closure => &[
                "thank",
                "thanks",
                "solved",
                "fixed",
                "resolved",
                "perfect",
                "worked",
                "got it",
                "understood",
            ],
            Self::Escalation => &["manager", "supervisor", "human", "agent", "speak to"],
            Self::Hedging => &["maybe", "might", "possibly", "perhaps"],
            Self::Confidence => &["definitely", "certainly", "absolutely"],
        }
    }
}

impl fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category to phrase-list mapping
///
/// Every category is always present. Overrides replace whole categories,
/// categories absent from an override keep their built-in phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<PhraseCategory, Vec<String>>",
    into = "BTreeMap<PhraseCategory, Vec<String>>"
)]
pub struct Lexicon {
    phrases: BTreeMap<PhraseCategory, Vec<String>>,
}

impl TryFrom<BTreeMap<PhraseCategory, Vec<String>>> for Lexicon {
    type Error = ConfigError;

    fn try_from(overrides: BTreeMap<PhraseCategory, Vec<String>>) -> Result<Self, Self::Error> {
        let lexicon = Self::default().with_overrides(overrides);
        lexicon.validate()?;
        Ok(lexicon)
    }
}

impl From<Lexicon> for BTreeMap<PhraseCategory, Vec<String>> {
    fn from(lexicon: Lexicon) -> Self {
        lexicon.phrases
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        let phrases = PhraseCategory::ALL
            .into_iter()
            .map(|category| {
                let list = category
                    .default_phrases()
                    .iter()
                    .map(|phrase| (*phrase).to_owned())
                    .collect();
                (category, list)
            })
            .collect();
        Self { phrases }
    }
}

impl Lexicon {
    /// Phrases of a category
    #[must_use]
    pub fn phrases(&self, category: PhraseCategory) -> &[String] {
        self.phrases.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Replace the listed categories, keeping the rest
    #[must_use]
    pub fn with_overrides(mut self, overrides: BTreeMap<PhraseCategory, Vec<String>>) -> Self {
        self.phrases.extend(overrides);
        self
    }

    /// Check that every category has phrases and every phrase is lowercase
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty category or offending phrase
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in PhraseCategory::ALL {
            let phrases = self.phrases(category);
            if phrases.is_empty() {
                return Err(ConfigError::EmptyCategory(category.as_str()));
            }
            if let Some(bad) = phrases
                .iter()
                .find(|p| p.trim().is_empty() || p.to_lowercase() != **p)
            {
                return Err(ConfigError::InvalidPhrase {
                    category: category.as_str(),
                    phrase: bad.clone(),
                });
            }
        }
        Ok(())
    }

    /// Parse a YAML (or JSON) override document on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or the result fails validation
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        let overrides: BTreeMap<PhraseCategory, Vec<String>> = serde_yaml::from_str(document)?;
        Self::try_from(overrides)
    }

    /// Read an override file on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path)?;
        Self::from_yaml_str(&document)
    }
}
