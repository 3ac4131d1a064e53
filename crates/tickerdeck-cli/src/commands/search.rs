use serde_json::json;

use tickerdeck_core::ApiClient;

use crate::cli::SearchArgs;
use crate::commands::CommandOutcome;
use crate::error::CliError;

pub async fn run(args: &SearchArgs, api: ApiClient) -> Result<CommandOutcome, CliError> {
    if args.query.trim().is_empty() {
        return Err(CliError::Command(String::from(
            "search query must not be empty",
        )));
    }

    let matches = match api.search(&args.query).await {
        Ok(matches) => matches,
        Err(error) => {
            let lines = vec![format!("error       : {}", error.message())];
            let data = json!({
                "query": &args.query,
                "results": [],
                "error": error.message(),
            });
            return Ok(CommandOutcome::ok(data, lines).with_failure(true));
        }
    };

    let shown: Vec<_> = matches.into_iter().take(args.limit).collect();

    let mut lines = Vec::new();
    if shown.is_empty() {
        lines.push(format!("no matches for '{}'", args.query));
    } else {
        for result in &shown {
            let symbol = result.symbol.as_deref().unwrap_or("?");
            let name = result.name.as_deref().unwrap_or("");
            let region = result.region.as_deref().unwrap_or("-");
            lines.push(format!("{symbol:<16} {name} ({region})"));
        }
    }

    let data = json!({
        "query": &args.query,
        "results": shown,
        "error": null,
    });

    Ok(CommandOutcome::ok(data, lines))
}
