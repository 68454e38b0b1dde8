// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring defaults, aggregation weights, and insight thresholds for conversation analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Scoring heuristics are rule based, so every threshold and default lives
//! here rather than inline in the metric functions.

/// Per-metric scoring constants
pub mod scoring;

/// Thresholds used to derive quality tiers, strengths and improvements
pub mod insights;

/// Status and reason strings shared by the collaborator layer
pub mod service {
    /// Reason reported when a conversation has no messages to analyze
    pub const NO_MESSAGES_REASON: &str = "No messages";
    /// Error message for analysis requested on an empty conversation
    pub const EMPTY_CONVERSATION_ERROR: &str = "Cannot analyze conversation with no messages";
    /// Error message when a report is requested before analysis
    pub const NO_ANALYSIS_ERROR: &str = "No analysis available. Please analyze first.";
    /// Service name used in structured logs
    pub const SERVICE_NAME: &str = "conversation-analytics";
}
