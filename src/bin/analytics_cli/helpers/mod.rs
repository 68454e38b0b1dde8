// ABOUTME: Re-exports helper modules for analytics-cli
// ABOUTME: Provides import file loading and JSON output helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod input;
