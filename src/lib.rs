// ABOUTME: Main library entry point for the conversation analytics platform
// ABOUTME: Wires the scoring engine to storage, batch analysis, reporting, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Conversation Analytics
//!
//! Scores chat conversations between a human and an automated agent. The
//! rule-based engine lives in `analytics-intelligence`; this crate provides
//! the collaborators around it.
//!
//! ## Architecture
//!
//! - **Storage**: `ConversationRepository` trait and an in-memory implementation
//!   with one analysis record per conversation
//! - **Services**: single and batch analysis, conversation reports, dashboard
//!   and daily summaries
//! - **Config**: environment-driven settings for batch runs and logging
//! - **Logging**: structured `tracing` output on stderr
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chrono::Utc;
//! use conversation_analytics::errors::AppResult;
//! use conversation_analytics::models::ConversationImport;
//! use conversation_analytics::services::AnalysisService;
//! use conversation_analytics::storage::{ConversationRepository, InMemoryRepository};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let repository = Arc::new(InMemoryRepository::new());
//!     let import: ConversationImport = serde_json::from_str(
//!         r#"{"messages": [{"sender": "user", "message": "Thanks, that fixed it!"}]}"#,
//!     )?;
//!     let id = repository.insert_conversation(import.into_conversation(Utc::now())?).await?;
//!
//!     let service = AnalysisService::new(repository);
//!     let stored = service.analyze_conversation(id).await?;
//!     println!("overall score {}", stored.metrics.overall_score());
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Error types shared with the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Conversation and analysis storage
pub mod storage;

/// Analysis and reporting services
pub mod services;

/// Domain models re-exported from the core crate
pub mod models {
    pub use analytics_core::models::*;
}

pub use analytics_intelligence::{ConversationAnalyzer, ConversationInsights, Lexicon};
