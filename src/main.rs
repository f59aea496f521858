// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! asigen - ActionScript 2.0 intrinsic class generator
//!
//! Reads ActionScript 2.0 class and interface sources and writes their
//! intrinsic declarations (headers and member signatures without bodies)
//! into a package directory tree.
//!
//! ## Features
//!
//! - Single files or whole directory trees
//! - Parallel scanning with rayon
//! - Optional filtering of private members

mod cli;
mod config;
mod error;
mod generator;
mod stub;

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use owo_colors::OwoColorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use config::Config;
use error::AsigenError;
use generator::{Generator, Report, Reporter};

fn main() -> ExitCode {
    // Diagnostics only; user-facing output goes through `Console`
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let cli = Cli::parse();

    if cli.paths.is_empty() {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                ExitCode::FAILURE
            }
        };
    }

    match run(&cli) {
        Ok(report) if report.has_failures() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Report> {
    let started = Instant::now();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply(&mut config);

    if config.verbose {
        print_banner();
    }

    let mut console = Console::new(&config);
    let report = Generator::new(&config).generate(&cli.paths, &mut console)?;

    if config.verbose {
        println!(
            "{} {} stubs, {} skipped, {} failed in {:.3} seconds",
            "Processed".green().bold(),
            report.written.len(),
            report.skipped,
            report.failed,
            started.elapsed().as_secs_f64()
        );
    }

    Ok(report)
}

/// Prints generator messages according to `--silent` and `--verbose`.
struct Console {
    silent: bool,
    verbose: bool,
}

impl Console {
    fn new(config: &Config) -> Self {
        Self {
            silent: config.silent,
            verbose: config.verbose,
        }
    }
}

impl Reporter for Console {
    fn progress(&mut self, message: &str) {
        if self.verbose {
            println!("{}", message.dimmed());
        }
    }

    fn warning(&mut self, message: &str) {
        if !self.silent {
            println!("{}: {}", "Warning".yellow().bold(), message);
        }
    }

    fn error(&mut self, error: &AsigenError) {
        eprintln!("{}: {}", "Error".red().bold(), error);
    }
}

fn print_banner() {
    println!(
        "{} {} - ActionScript 2.0 intrinsic class generator\n",
        "asigen".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
