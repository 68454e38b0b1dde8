// ABOUTME: Configuration management module for analytics services and the CLI
// ABOUTME: Re-exports environment configuration and the scoring engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: batch and logging settings from `ANALYTICS_*` and `LOG_*` variables
//! - **Intelligence**: the scoring engine's phrase lexicon, from `ANALYTICS_LEXICON_FILE`

/// Environment configuration
pub mod environment;

pub use analytics_intelligence::config::intelligence::{
    ConfigError, IntelligenceConfig, LEXICON_FILE_ENV,
};
pub use environment::{AnalyticsConfig, BatchConfig};
