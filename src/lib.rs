// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::new_without_default)]

pub mod aggregate;
pub mod boring;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod headermap;
pub mod http;
pub mod httpinner;
pub mod report;
pub mod stats;
pub mod targets;
pub mod xmlscan;

#[cfg(test)]
mod classifier_tests;
