// ABOUTME: Tests for logging configuration parsed from the environment
// ABOUTME: Covers format parsing, defaults, and builder overrides
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use rawfeed::logging::{LogFormat, LoggingConfig, DEFAULT_SERVICE_NAME};
use serial_test::serial;
use std::env;

const ENV_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
    "SERVICE_VERSION",
];

fn clear_env() {
    for name in ENV_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_lossy("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_lossy(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::from_str_lossy("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_lossy("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_lossy("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
    assert!(!config.include_spans);
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    assert!(!config.use_stderr);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "rawfeed-test");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_spans);
    assert_eq!(config.service_name, "rawfeed-test");
}

#[test]
#[serial]
fn test_builder_overrides() {
    clear_env();
    let config = LoggingConfig::from_env().with_stderr().with_level("trace");

    assert!(config.use_stderr);
    assert_eq!(config.level, "trace");

    let filter = config.env_filter().to_string();
    assert!(filter.contains("rawfeed_nutrition=trace"));
}

#[test]
#[serial]
fn test_rust_log_is_not_overridden_by_configured_level() {
    clear_env();
    env::set_var("RUST_LOG", "warn");

    let filter = LoggingConfig::default()
        .with_level("trace")
        .env_filter()
        .to_string();
    clear_env();

    assert!(!filter.contains("rawfeed_nutrition=trace"));
    assert!(!filter.contains("trace"));
    assert!(filter.contains("warn"));
}
