use crate::cli::OutputFormat;
use crate::commands::CommandOutcome;
use crate::error::CliError;

pub fn render(outcome: &CommandOutcome, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&outcome.data)?
            } else {
                serde_json::to_string(&outcome.data)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            for line in &outcome.lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}
