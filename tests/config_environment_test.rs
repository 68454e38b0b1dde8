// ABOUTME: Unit tests for environment configuration of batch runs and logging
// ABOUTME: Validates defaults, overrides, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use conversation_analytics::config::environment::{
    BATCH_CONCURRENCY_ENV, DEFAULT_BATCH_CONCURRENCY, DEFAULT_SCOPE_ENV,
};
use conversation_analytics::config::AnalyticsConfig;
use conversation_analytics::errors::ErrorCode;
use conversation_analytics::logging::LogFormat;
use conversation_analytics::storage::BatchScope;
use serial_test::serial;
use std::env;

fn clear_env() {
    env::remove_var(BATCH_CONCURRENCY_ENV);
    env::remove_var(DEFAULT_SCOPE_ENV);
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = AnalyticsConfig::from_env().unwrap();
    assert_eq!(config.batch.concurrency, DEFAULT_BATCH_CONCURRENCY);
    assert_eq!(config.batch.default_scope, BatchScope::Pending);
}

#[test]
#[serial]
fn test_overrides_are_parsed() {
    clear_env();
    env::set_var(BATCH_CONCURRENCY_ENV, "8");
    env::set_var(DEFAULT_SCOPE_ENV, "Unanalyzed");
    let config = AnalyticsConfig::from_env();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.batch.concurrency, 8);
    assert_eq!(config.batch.default_scope, BatchScope::Unanalyzed);
}

#[test]
#[serial]
fn test_invalid_values_rejected() {
    clear_env();
    env::set_var(BATCH_CONCURRENCY_ENV, "0");
    let zero = AnalyticsConfig::from_env();
    env::set_var(BATCH_CONCURRENCY_ENV, "many");
    let garbage = AnalyticsConfig::from_env();
    env::remove_var(BATCH_CONCURRENCY_ENV);
    env::set_var(DEFAULT_SCOPE_ENV, "everything");
    let scope = AnalyticsConfig::from_env();
    clear_env();

    assert_eq!(zero.unwrap_err().code, ErrorCode::ConfigInvalid);
    assert_eq!(garbage.unwrap_err().code, ErrorCode::ConfigInvalid);
    assert_eq!(scope.unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert!("xml".parse::<LogFormat>().is_err());
}
