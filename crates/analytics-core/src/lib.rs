// ABOUTME: Core types and constants for the conversation analytics platform
// ABOUTME: Foundation crate with error handling, conversation models, and scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Analytics Core
//!
//! Foundation crate providing shared types and constants for conversation
//! quality analytics. The scoring engine and the collaborator layer (storage,
//! batch runs, reporting) both build on these types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring defaults, weights and insight thresholds
//! - **models**: Messages, transcripts, conversations and metrics records

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring constants organized by metric
pub mod constants;

/// Core data models (Message, Transcript, MetricsRecord, Conversation)
pub mod models;
