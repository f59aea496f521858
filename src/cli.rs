//! CLI argument parsing for asigen.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// asigen - generate ActionScript 2.0 intrinsic class stubs from source files
#[derive(Parser, Debug)]
#[command(name = "asigen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source files (*.as) or directories to search
    pub paths: Vec<PathBuf>,

    /// Output stubs under the specified directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Recursively search directories for class files
    #[arg(short, long)]
    pub recursive: bool,

    /// Only include public definitions
    #[arg(long = "public")]
    pub public_only: bool,

    /// Suppress all console output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub silent: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Read settings from this file instead of ./asigen.toml
    #[arg(long, value_name = "FILE", env = "ASIGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Overlay the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(jobs) = self.jobs {
            config.jobs = jobs;
        }
        config.recursive |= self.recursive;
        config.public_only |= self.public_only;
        config.silent |= self.silent;
        config.verbose |= self.verbose;
        // silent wins whichever layer set it
        if config.silent {
            config.verbose = false;
        }
    }
}
