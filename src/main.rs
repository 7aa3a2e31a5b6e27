// Copyright 2026 Sitekeeper Contributors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code, unused_imports)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod cli;
mod config;
mod docset;
mod error;
mod extract;
mod integrity;
mod localize;
mod rewrite;

#[derive(Parser)]
#[command(
    name = "sitekeeper",
    about = "Sitekeeper — keep a static HTML site's images local and its links unbroken",
    version,
    after_help = "Run 'sitekeeper <command> --help' for details on each command."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download remote images and rewrite documents to local copies
    Localize {
        /// Project root holding the HTML documents
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Remote image host prefix to localize
        #[arg(long)]
        remote_prefix: Option<String>,
        /// Assets directory, relative to the project root
        #[arg(long)]
        assets_dir: Option<String>,
        /// Per-request timeout in milliseconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Commit label for the orchestration wrapper (no effect on the run)
        #[arg(long)]
        commit_message: Option<String>,
    },
    /// Verify local links and in-page fragment anchors
    Check {
        /// Project root holding the HTML documents
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Check environment and diagnose issues
    Doctor {
        /// Project root holding the HTML documents
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("SITEKEEPER_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("SITEKEEPER_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("SITEKEEPER_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("SITEKEEPER_NO_COLOR", "1");
    }

    // Initialize tracing
    let default_directive = if cli.verbose {
        "sitekeeper=debug"
    } else {
        "sitekeeper=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Localize {
            root,
            remote_prefix,
            assets_dir,
            timeout,
            commit_message,
        } => {
            let cfg = config::LocalizeConfig::resolve(
                root,
                remote_prefix,
                assets_dir,
                timeout,
                commit_message,
            );
            cli::localize_cmd::run(&cfg).await
        }
        Commands::Check { root } => cli::check_cmd::run(&root).await,
        Commands::Doctor { root } => cli::doctor::run(&root).await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sitekeeper", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error, 2=findings (set by check)
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}
