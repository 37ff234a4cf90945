// File: targets.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::error::ScanError;
use crate::xmlscan;
use std::collections::HashSet;
use std::fs;

/// Deduplicated scan targets in first-seen order. Reporting walks the set
/// in the same order targets were discovered.
#[derive(Debug, Clone, Default)]
pub struct TargetSet {
    targets: Vec<String>,
    seen: HashSet<String>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the target was already present.
    pub fn insert(&mut self, target: String) -> bool {
        if self.seen.contains(&target) {
            return false;
        }
        self.seen.insert(target.clone());
        self.targets.push(target);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.targets.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.targets.clone()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Canonicalize one plain-text line. Empty lines yield nothing; anything
/// not already carrying a scheme gets `http://`.
pub fn normalize_line(line: &str) -> Option<String> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }
    if line.starts_with("http") {
        Some(line.to_string())
    } else {
        Some(format!("http://{}", line))
    }
}

/// Build the target set from the single CLI argument: a literal URL, an
/// XML scan report (filename ending in xml), or a plain-text list.
pub fn load(arg: &str) -> Result<TargetSet, ScanError> {
    let mut set = TargetSet::new();

    if arg.starts_with("http") {
        set.insert(arg.to_string());
        return Ok(set);
    }

    let content = fs::read_to_string(arg).map_err(|source| ScanError::Input {
        path: arg.to_string(),
        source,
    })?;

    if arg.ends_with("xml") {
        xmlscan::extract_targets(&content, &mut set)?;
    } else {
        for line in content.lines() {
            if let Some(target) = normalize_line(line) {
                set.insert(target);
            }
        }
    }

    Ok(set)
}
