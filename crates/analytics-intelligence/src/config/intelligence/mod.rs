// ABOUTME: Scoring engine configuration loaded once per process
// ABOUTME: Holds the phrase lexicon with environment-driven file overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! The scoring engine reads all of its keyword and phrase lists from a
//! [`Lexicon`]. The built-in lists can be replaced per category by pointing
//! `ANALYTICS_LEXICON_FILE` at a YAML or JSON document:
//!
//! ```yaml
//! informal: [gonna, wanna, yeah, nope, dunno, lol]
//! escalation: [manager, supervisor, human, agent, "speak to", complaint]
//! ```

pub mod error;
pub mod lexicon;

pub use error::ConfigError;
pub use lexicon::{Lexicon, PhraseCategory};

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Environment variable naming a lexicon override file
pub const LEXICON_FILE_ENV: &str = "ANALYTICS_LEXICON_FILE";

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main scoring engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Phrase lists used for matching
    pub lexicon: Lexicon,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon file cannot be read, parsed, or validated
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(LEXICON_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_lexicon_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Build a configuration from a lexicon override file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn from_lexicon_file(path: &Path) -> Result<Self, ConfigError> {
        let lexicon = Lexicon::from_file(path)?;
        info!(path = %path.display(), "Loaded lexicon overrides");
        Ok(Self { lexicon })
    }
}
