// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! chronicle library
//!
//! Shared plumbing for the `chronicle-render` and `chronicle-publish`
//! binaries, exported for integration tests.

pub mod config;
pub mod logging;
pub mod publish;
pub mod render;
