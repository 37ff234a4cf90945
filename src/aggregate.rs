// File: aggregate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::classifier::Classification;
use crate::targets::TargetSet;
use std::collections::HashMap;

/// Findings blob mapped to every target that produced exactly that blob.
/// Groups keep creation order, targets keep scan order. Matching is exact
/// string equality, so the same findings in a different order form a
/// separate group.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    groups: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl Grouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty blobs mean "no findings" and never form a group.
    pub fn insert(&mut self, blob: &str, target: &str) {
        if blob.is_empty() {
            return;
        }
        match self.index.get(blob) {
            Some(&at) => self.groups[at].1.push(target.to_string()),
            None => {
                self.index.insert(blob.to_string(), self.groups.len());
                self.groups
                    .push((blob.to_string(), vec![target.to_string()]));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(blob, targets)| (blob.as_str(), targets.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Everything the scan loop accumulates: the target set and the
/// per-target classifications in scan order. Owned by the orchestration
/// and handed read-only to the renderer.
#[derive(Debug, Default)]
pub struct ScanState {
    targets: TargetSet,
    results: Vec<(String, Classification)>,
}

impl ScanState {
    pub fn new(targets: TargetSet) -> Self {
        Self {
            targets,
            results: Vec::new(),
        }
    }

    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    pub fn record(&mut self, target: String, classification: Classification) {
        self.results.push((target, classification));
    }

    pub fn results(&self) -> &[(String, Classification)] {
        &self.results
    }

    pub fn interesting_groups(&self) -> Grouping {
        self.group_by(|c| &c.interesting)
    }

    pub fn missing_security_groups(&self) -> Grouping {
        self.group_by(|c| &c.missing_security)
    }

    pub fn bad_header_groups(&self) -> Grouping {
        self.group_by(|c| &c.bad_headers)
    }

    fn group_by<'a>(&'a self, blob: impl Fn(&'a Classification) -> &'a String) -> Grouping {
        let mut grouping = Grouping::new();
        for (target, classification) in &self.results {
            grouping.insert(blob(classification), target);
        }
        grouping
    }
}
