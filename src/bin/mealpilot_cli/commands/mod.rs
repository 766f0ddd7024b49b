// ABOUTME: Command implementations for mealpilot-cli
// ABOUTME: Each command returns pretty-printed JSON for main to print
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod recommend;
pub mod search;
