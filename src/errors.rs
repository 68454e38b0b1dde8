// ABOUTME: Error handling for the analytics services, storage, and CLI
// ABOUTME: Re-exports the unified AppError and ErrorCode from analytics-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! All fallible operations in this crate return [`AppResult`]. The type lives
//! in `analytics-core` so the engine configuration and the collaborator layer
//! share a single error code table.

pub use analytics_core::errors::{AppError, AppResult, ErrorCode};
