// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for rawfeed-cli
// ABOUTME: Provides access to feeding calculators and the recipe balance check

pub mod balance;
pub mod feeding;
