// ABOUTME: Configuration module for analytics-intelligence crate
// ABOUTME: Re-exports the engine configuration and phrase lexicon types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (phrase lexicon, loading, validation)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
