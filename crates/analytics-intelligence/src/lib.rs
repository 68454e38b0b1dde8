// ABOUTME: Conversation scoring engine for agent/human chat transcripts
// ABOUTME: Exposes the analyzer, per-metric functions, lexicon configuration, and insight rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Analytics Intelligence
//!
//! Rule-based scoring of conversations between a human and an automated
//! agent. [`ConversationAnalyzer::analyze`] turns an ordered
//! [`Transcript`](analytics_core::models::Transcript) into a
//! [`MetricsRecord`](analytics_core::models::MetricsRecord). Analysis is a
//! pure function of the transcript: no I/O, no clock reads, no shared
//! mutable state, so analyzers can be used from any number of threads.
//!
//! ## Modules
//!
//! - **analyzer**: The scoring engine entry point
//! - **metrics**: One pure function per metric, usable in isolation
//! - **text**: Lowercased message views and phrase matching helpers
//! - **config**: Phrase lexicon loaded once per process
//! - **insights**: Quality tier, strengths and improvement rules

/// Scoring engine entry point
pub mod analyzer;

/// Phrase lexicon and engine configuration
pub mod config;

/// Quality tier, strengths and improvement rules
pub mod insights;

/// Independent per-metric scoring functions
pub mod metrics;

/// Message views and phrase matching helpers
pub mod text;

pub use analyzer::ConversationAnalyzer;
pub use config::intelligence::{ConfigError, IntelligenceConfig, Lexicon, PhraseCategory};
pub use insights::ConversationInsights;
