// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents get their numbers, and their order.
//!
//! `core` scores one term against one document; `ranking` sums those scores
//! over a query and sorts the documents that matched.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_results, rank};
