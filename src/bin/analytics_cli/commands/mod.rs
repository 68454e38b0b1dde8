// ABOUTME: Re-exports command modules for analytics-cli
// ABOUTME: Provides the analyze, batch and lexicon commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod batch;
pub mod lexicon;
