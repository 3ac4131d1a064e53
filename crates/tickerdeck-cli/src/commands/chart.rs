use serde_json::json;

use tickerdeck_core::{select_timeframe, to_chronological, ApiClient, Symbol, Timeframe, TradingDate};

use crate::cli::ChartArgs;
use crate::commands::CommandOutcome;
use crate::error::CliError;

pub async fn run(args: &ChartArgs, api: ApiClient) -> Result<CommandOutcome, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let timeframe = Timeframe::resolve(&args.timeframe);

    let stock = match api.stock(&symbol).await {
        Ok(stock) => stock,
        Err(error) => {
            // Transport failure still yields a renderable outcome, exit 3.
            let lines = vec![format!("error       : {}", error.message())];
            let data = json!({
                "symbol": symbol,
                "timeframe": timeframe,
                "bars": [],
                "error": error.message(),
            });
            return Ok(CommandOutcome::ok(data, lines).with_failure(true));
        }
    };

    let bars = select_timeframe(
        &to_chronological(stock.prices.clone()),
        timeframe,
        TradingDate::today(),
    );

    let mut lines = Vec::new();
    lines.push(format!("symbol      : {symbol}"));
    lines.push(format!("timeframe   : {timeframe}"));

    if bars.is_empty() {
        lines.push(String::from("no chart data available"));
    } else {
        lines.push(String::from(
            "date          open      high      low       close     volume",
        ));
        for bar in &bars {
            lines.push(format!(
                "{}    {:<9.2} {:<9.2} {:<9.2} {:<9.2} {}",
                bar.date,
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume.map_or(String::from("-"), |v| v.to_string()),
            ));
        }
    }

    if let Some(message) = &stock.error {
        lines.push(format!("error       : {message}"));
    }

    let failed = stock.error.is_some();

    let data = json!({
        "symbol": symbol,
        "timeframe": timeframe,
        "bars": bars,
        "error": stock.error,
    });

    Ok(CommandOutcome::ok(data, lines).with_failure(failed))
}
