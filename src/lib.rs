// Copyright 2026 Sitekeeper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sitekeeper library — maintenance toolchain for a static HTML site.
//!
//! This library crate exposes the core modules for integration testing.

#![allow(
    dead_code,
    unused_imports,
    clippy::new_without_default,
    clippy::should_implement_trait
)]

pub mod cli;
pub mod config;
pub mod docset;
pub mod error;
pub mod extract;
pub mod integrity;
pub mod localize;
pub mod rewrite;
