// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::io::{stdout, IsTerminal};
use std::process;

use hprobe::aggregate::ScanState;
use hprobe::boring::BoringHeaders;
use hprobe::classifier::HeaderClassifier;
use hprobe::cli::Cli;
use hprobe::config::ConfigParameter;
use hprobe::http::Http;
use hprobe::report::{ReportGenerator, ReportRenderer};
use hprobe::stats::ScanStats;
use hprobe::targets;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // usage and help are not a success exit
            let _ = error.print();
            process::exit(2);
        }
    };

    let log_level = cli
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Warn);
    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .context("Failed to initialize logger")?;

    let interactive = stdout().is_terminal();
    let mut config = ConfigParameter::new();
    config.set_timeout(cli.timeout);
    config.set_suppress_stats(cli.suppress_stats);
    config.set_print_failed(cli.show_failed);
    config.set_color_enabled(interactive && !cli.no_color);
    colored::control::set_override(config.color_enabled());

    let target_set = targets::load(&cli.target)?;

    let boring_path = cli
        .boring_file
        .clone()
        .unwrap_or_else(BoringHeaders::default_path);
    let boring = BoringHeaders::load(&boring_path)?;

    let classifier = HeaderClassifier::new(boring);
    let http = Http::new(&config).context("Failed to build HTTP client")?;
    let mut state = ScanState::new(target_set);
    let mut stats = ScanStats::new(state.targets().len());

    let pb = if interactive {
        let pb = ProgressBar::new(state.targets().len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap()
            .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let scan_targets = state.targets().to_vec();
    let mut interrupted = false;
    for target in scan_targets {
        pb.set_message(target.clone());
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                interrupted = true;
            }
            probed = http.probe(&target) => match probed {
                Ok(inner) => {
                    debug!("{} responded with status {}", inner.url(), inner.status());
                    stats.add_success();
                    state.record(target, classifier.classify(inner.headers()));
                }
                Err(error) => {
                    stats.add_failure();
                    if config.print_failed() {
                        warn!("skipping {}: {}", target, error);
                    } else {
                        debug!("skipping {}: {}", target, error);
                    }
                }
            }
        }
        if interrupted {
            break;
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if interrupted {
        println!("Caught interrupt, quitting...");
        println!("Results so far:\n");
    }

    let renderer = ReportRenderer::new(config.color_enabled());
    let mut out = stdout().lock();
    renderer.render(&state, &mut out)?;
    drop(out);

    if let Some(path) = cli.json.as_deref() {
        ReportGenerator::generate_json_report(&state, path)
            .context("Failed to write JSON report")?;
    }

    if !config.suppress_stats() {
        println!("{}", stats.summary());
    }

    Ok(())
}
