// ABOUTME: Environment configuration for batch analysis runs and logging
// ABOUTME: Parses and validates ANALYTICS_* variables with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use crate::storage::BatchScope;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

/// Batch concurrency environment variable
pub const BATCH_CONCURRENCY_ENV: &str = "ANALYTICS_BATCH_CONCURRENCY";

/// Default batch scope environment variable
pub const DEFAULT_SCOPE_ENV: &str = "ANALYTICS_DEFAULT_SCOPE";

/// Conversations analyzed at once when not configured
pub const DEFAULT_BATCH_CONCURRENCY: usize = 4;

/// Batch analysis settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Conversations analyzed concurrently, at least 1
    pub concurrency: usize,
    /// Scope used when a run does not name one
    pub default_scope: BatchScope,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_BATCH_CONCURRENCY,
            default_scope: BatchScope::Pending,
        }
    }
}

impl BatchConfig {
    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when concurrency is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.concurrency == 0 {
            return Err(AppError::config_invalid(format!(
                "{BATCH_CONCURRENCY_ENV} must be at least 1"
            )));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    /// Batch analysis settings
    pub batch: BatchConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AnalyticsConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable or invalid value
    pub fn from_env() -> AppResult<Self> {
        let batch = BatchConfig {
            concurrency: parse_env_or(BATCH_CONCURRENCY_ENV, DEFAULT_BATCH_CONCURRENCY)?,
            default_scope: parse_env_or(DEFAULT_SCOPE_ENV, BatchScope::Pending)?,
        };
        batch.validate()?;

        let config = Self {
            batch,
            logging: LoggingConfig::from_env(),
        };

        info!(
            batch.concurrency = config.batch.concurrency,
            batch.default_scope = %config.batch.default_scope,
            "Loaded analytics configuration"
        );

        Ok(config)
    }
}

/// Parse an environment variable, using the default when unset or blank
fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("Invalid value '{raw}' for {key}: {e}"))
        }),
        Ok(_) | Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(AppError::config(format!("Failed to read {key}: {e}")).with_source(e)),
    }
}
