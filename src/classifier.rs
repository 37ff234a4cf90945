// File: classifier.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::boring::BoringHeaders;
use crate::headermap::ResponseHeaders;
use once_cell::sync::Lazy;
use regex::Regex;

static FRAME_POLICY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)SAMEORIGIN|DENY").unwrap());

static NOSNIFF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)nosniff").unwrap());

static MAX_AGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)max-age\s*=\s*(\d+)").unwrap());

/// Any of these counts as a Content-Security-Policy.
const CSP_HEADERS: [&str; 3] = [
    "content-security-policy",
    "x-content-security-policy",
    "x-webkit-csp",
];

/// 30 days. Anything shorter is too weak to pin a host to HTTPS.
const HSTS_MIN_MAX_AGE: u64 = 2_592_000;

const TRUNCATE_THRESHOLD: usize = 80;
const TRUNCATE_AT: usize = 75;

/// Findings for one target, one line per finding, `\n`-terminated. An
/// empty blob means nothing to report in that category. Identical blobs
/// are what the aggregator groups on, so formatting here is load-bearing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub interesting: String,
    pub missing_security: String,
    pub bad_headers: String,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.interesting.is_empty()
            && self.missing_security.is_empty()
            && self.bad_headers.is_empty()
    }
}

/// Cap long header values so one huge CSP does not drown the report.
pub fn trunc(value: &str) -> String {
    if value.chars().count() > TRUNCATE_THRESHOLD {
        let cut: String = value.chars().take(TRUNCATE_AT).collect();
        format!("{}[...]", cut)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct HeaderClassifier {
    boring: BoringHeaders,
}

impl HeaderClassifier {
    pub fn new(boring: BoringHeaders) -> Self {
        Self { boring }
    }

    pub fn classify(&self, headers: &ResponseHeaders) -> Classification {
        let mut result = Classification::default();

        for (name, value) in headers.iter() {
            if !self.boring.contains(name) {
                result.interesting.push_str(name);
                result.interesting.push_str(": ");
                result.interesting.push_str(&trunc(value));
                result.interesting.push('\n');
            }
        }

        self.check_security_headers(headers, &mut result);
        result
    }

    /// Each rule fires independently. Headers that only hurt when
    /// misconfigured (x-xss-protection, CORS) stay quiet while absent;
    /// the rest are flagged as missing too.
    fn check_security_headers(&self, headers: &ResponseHeaders, result: &mut Classification) {
        match headers.get("x-frame-options") {
            Some(value) if !FRAME_POLICY_RE.is_match(value) => {
                bad(result, "x-frame-options", value);
            }
            None => missing(result, "x-frame-options"),
            _ => {}
        }

        match headers.get("x-content-type-options") {
            Some(value) if NOSNIFF_RE.is_match(value) => {}
            _ => missing(result, "x-content-type-options"),
        }

        if let Some(value) = headers.get("x-xss-protection") {
            if value.contains('0') {
                bad(result, "x-xss-protection", value);
            }
        }

        match headers.get("strict-transport-security") {
            Some(value) => match hsts_max_age(value) {
                Some(age) if age < HSTS_MIN_MAX_AGE => {
                    bad(result, "strict-transport-security", value);
                }
                Some(_) => {}
                None => missing(result, "strict-transport-security"),
            },
            None => missing(result, "strict-transport-security"),
        }

        if let Some(value) = headers.get("access-control-allow-origin") {
            if value.contains('*') {
                bad(result, "access-control-allow-origin", value);
            }
        }

        if !CSP_HEADERS.iter().any(|name| headers.contains(name)) {
            missing(result, "content-security-policy");
        }
    }
}

fn hsts_max_age(value: &str) -> Option<u64> {
    MAX_AGE_RE
        .captures(value)
        .and_then(|captures| captures.get(1))
        .and_then(|age| age.as_str().parse().ok())
}

fn missing(result: &mut Classification, name: &str) {
    result.missing_security.push_str(name);
    result.missing_security.push('\n');
}

fn bad(result: &mut Classification, name: &str, value: &str) {
    result.bad_headers.push_str(name);
    result.bad_headers.push_str(": ");
    result.bad_headers.push_str(&trunc(value));
    result.bad_headers.push('\n');
}
