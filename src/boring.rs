// File: boring.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::error::ScanError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const BORING_HEADERS_FILE: &str = "boringheaders.txt";

/// Header names that are never worth reporting. Loaded once at startup;
/// without it every standard header would land in the interesting section.
#[derive(Debug, Clone, Default)]
pub struct BoringHeaders {
    names: HashSet<String>,
}

impl BoringHeaders {
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let content = fs::read_to_string(path).map_err(|source| ScanError::BoringHeaders {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_lines(&content))
    }

    /// One header name per line, compared lower-cased. Blank lines and
    /// `#` comments are ignored.
    pub fn from_lines(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_ascii_lowercase())
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The list ships next to the executable, like the binary's other
    /// assets. Falls back to the working directory if the executable
    /// location cannot be determined.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(BORING_HEADERS_FILE)))
            .unwrap_or_else(|| PathBuf::from(BORING_HEADERS_FILE))
    }
}
