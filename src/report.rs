// File: report.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::aggregate::{Grouping, ScanState};
use chrono::Utc;
use colored::{Color, Colorize};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Terminal output. Sites sharing a findings blob are merged under one
/// block: the targets first, then the findings they have in common.
/// Sections without findings are omitted entirely.
pub struct ReportRenderer {
    color_enabled: bool,
}

impl ReportRenderer {
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    pub fn render<W: Write>(&self, state: &ScanState, out: &mut W) -> io::Result<()> {
        self.render_section(
            out,
            "Interesting Headers",
            Color::Green,
            &state.interesting_groups(),
        )?;
        self.render_section(
            out,
            "Missing Security Headers",
            Color::Yellow,
            &state.missing_security_groups(),
        )?;
        self.render_section(
            out,
            "Bad Security Headers",
            Color::Red,
            &state.bad_header_groups(),
        )?;
        Ok(())
    }

    fn render_section<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        color: Color,
        grouping: &Grouping,
    ) -> io::Result<()> {
        if grouping.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", self.paint(title, color))?;
        for (blob, targets) in grouping.iter() {
            for target in targets {
                writeln!(out, "{}", self.paint(target, Color::Blue))?;
            }
            // the blob is newline-terminated already; the extra newline
            // separates groups
            writeln!(out, "{}", blob)?;
        }
        Ok(())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportEntry {
    pub target: String,
    pub interesting: Vec<String>,
    pub missing_security: Vec<String>,
    pub bad_headers: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    date: String,
    total_targets: usize,
    scanned: usize,
    entries: Vec<ReportEntry>,
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn entries(state: &ScanState) -> Vec<ReportEntry> {
        state
            .results()
            .iter()
            .map(|(target, classification)| ReportEntry {
                target: target.clone(),
                interesting: split_lines(&classification.interesting),
                missing_security: split_lines(&classification.missing_security),
                bad_headers: split_lines(&classification.bad_headers),
            })
            .collect()
    }

    pub fn generate_json_report(state: &ScanState, output_path: &Path) -> io::Result<()> {
        let report = JsonReport {
            date: Utc::now().to_rfc3339(),
            total_targets: state.targets().len(),
            scanned: state.results().len(),
            entries: Self::entries(state),
        };
        let json = serde_json::to_string_pretty(&report).unwrap();
        let mut file = File::create(output_path)?;
        writeln!(file, "{}", json)?;
        Ok(())
    }
}

fn split_lines(blob: &str) -> Vec<String> {
    blob.lines().map(|line| line.to_string()).collect()
}
