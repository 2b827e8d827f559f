// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! shipprep library
//!
//! This module exports the CLI configuration and task orchestration of
//! shipprep for use in integration tests and as a library.

pub mod config;
pub mod tasks;
