// Copyright (c) 2026 - present Shipprep Contributors
// SPDX-License-Identifier: MIT

//! shipprep: release preparation for CI builds
//!
//! This binary crate fetches and reconciles GitHub contributor data for
//! release notes and runs the git commands that make a CI clone releasable.

use clap::Parser;
use tracing::error;

use shipprep::config::{Command, Config};
use shipprep::tasks;
use shipprep_contributors::{GitHubConfig, MatchPolicy, RevisionRange};
use shipprep_git::{GitIdentity, GitSetup};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Logs go to stderr so that command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(config).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    config.validate()?;
    let repo_path = config.repo_path.clone();

    match config.command {
        Command::Contributors {
            repository,
            from,
            to,
            output,
            api_url,
            auth_token,
            ignore_case,
        } => {
            let mut github = GitHubConfig::new(repository).with_api_url(api_url);
            if let Some(token) = auth_token {
                github = github.with_auth_token(token);
            }
            let policy = if ignore_case {
                MatchPolicy::IgnoreCase
            } else {
                MatchPolicy::Exact
            };
            let range = RevisionRange::new(from, to);

            tasks::fetch_contributors(&repo_path, github, &range, policy, &output).await?;
        }
        Command::Prepare { branch, user, email } => {
            let identity = GitIdentity::new(user, email);
            tasks::prepare_working_copy(&repo_path, &branch, &identity)?;
        }
        Command::Unshallow => {
            GitSetup::new(&repo_path).unshallow()?;
        }
        Command::Checkout { branch } => {
            GitSetup::new(&repo_path).checkout(&branch)?;
        }
        Command::SetIdentity { user, email } => {
            let identity = GitIdentity::new(user, email);
            GitSetup::new(&repo_path).set_identity(&identity)?;
        }
    }

    Ok(())
}
