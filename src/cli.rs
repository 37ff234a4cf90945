// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    /// Target URL (anything starting with http), or a file of targets:
    /// nmap/servicescan XML when the name ends in xml, otherwise one
    /// target per line
    pub target: String,

    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = 2,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short = 's',
        long = "suppress-stats",
        help = "Suppress scan summary and statistics"
    )]
    pub suppress_stats: bool,

    #[arg(
        short = 'S',
        long = "show-failed",
        help = "Warn about unreachable targets instead of skipping them silently"
    )]
    pub show_failed: bool,

    #[arg(
        long = "boring-file",
        help = "Override the boring headers list location"
    )]
    pub boring_file: Option<PathBuf>,

    #[arg(short = 'j', long = "json", help = "Write scan results to a JSON file")]
    pub json: Option<PathBuf>,
}
