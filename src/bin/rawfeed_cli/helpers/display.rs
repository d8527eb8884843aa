// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for rawfeed-cli
// ABOUTME: Pretty-prints command results as JSON on stdout

use rawfeed::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Print a value as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    // Broken pipes (e.g. `| head`) are not worth failing the command over
    let _ = writeln!(stdout, "{text}");
    Ok(())
}
