// ABOUTME: Configuration error types for scoring engine configuration
// ABOUTME: Defines error variants for unreadable, unparsable, or invalid lexicon files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for engine configuration validation.

use analytics_core::errors::AppError;
use std::io;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lexicon file could not be read
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// A category has no phrases
    #[error("Empty phrase category: {0}")]
    EmptyCategory(&'static str),

    /// A phrase is blank or not lowercase
    #[error("Invalid phrase in {category}: '{phrase}'")]
    InvalidPhrase {
        /// Category containing the phrase
        category: &'static str,
        /// Offending phrase
        phrase: String,
    },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Io(_) | ConfigError::Parse(_) => Self::config(error.to_string()),
            ConfigError::EmptyCategory(_) | ConfigError::InvalidPhrase { .. } => {
                Self::config_invalid(error.to_string())
            }
        }
    }
}
