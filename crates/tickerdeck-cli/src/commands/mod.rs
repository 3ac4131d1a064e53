mod chart;
mod search;
mod view;

use std::sync::Arc;

use serde_json::Value;

use tickerdeck_core::{ApiClient, HttpClient, ReqwestHttpClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Rendered result of one command: machine output, terminal lines, and
/// whether the produced view carries an error state (exit code 3).
pub struct CommandOutcome {
    pub data: Value,
    pub lines: Vec<String>,
    pub failed: bool,
}

impl CommandOutcome {
    pub fn ok(data: Value, lines: Vec<String>) -> Self {
        Self {
            data,
            lines,
            failed: false,
        }
    }

    pub fn with_failure(mut self, failed: bool) -> Self {
        self.failed = failed;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandOutcome, CliError> {
    let api = api_client(cli);

    match &cli.command {
        Command::View(args) => view::run(args, api).await,
        Command::Chart(args) => chart::run(args, api).await,
        Command::Search(args) => search::run(args, api).await,
    }
}

fn api_client(cli: &Cli) -> ApiClient {
    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let api = match &cli.base_url {
        Some(base_url) => ApiClient::new(http, base_url),
        None => ApiClient::from_env(http),
    };
    api.with_timeout_ms(cli.timeout_ms)
}
