// File: error.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::io;
use thiserror::Error;

/// Fatal errors. Each of these aborts the run before or during target
/// loading; per-target network failures are handled separately and never
/// surface here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not open {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("boring headers list {path} not readable: {source}")]
    BoringHeaders {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid XML scan file: {0}")]
    InvalidXml(String),
}
