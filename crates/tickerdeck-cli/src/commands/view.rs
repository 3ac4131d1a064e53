use serde_json::json;

use tickerdeck_core::{
    classify, format_magnitude, format_percent, latest_price, select_timeframe, to_chronological,
    ApiClient, Dashboard, Symbol, Timeframe, TradingDate,
};

use crate::cli::ViewArgs;
use crate::commands::CommandOutcome;
use crate::error::CliError;

pub async fn run(args: &ViewArgs, api: ApiClient) -> Result<CommandOutcome, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let timeframe = Timeframe::resolve(&args.timeframe);

    let dashboard = Dashboard::new(api);
    let view = dashboard.fetch_all(&symbol).await;

    let chart = view
        .stock
        .as_ref()
        .map(|stock| {
            select_timeframe(
                &to_chronological(stock.prices.clone()),
                timeframe,
                TradingDate::today(),
            )
        })
        .unwrap_or_default();

    let price = view.stock.as_ref().and_then(latest_price);
    let analysis = view
        .stock
        .as_ref()
        .and_then(|s| s.fundamental_analysis.as_ref());
    let tone = classify(analysis.and_then(|a| a.classification.as_deref()));

    let mut lines = Vec::new();
    lines.push(format!("symbol      : {symbol}"));

    if let Some(stock) = &view.stock {
        if let Some(company) = &stock.company_name {
            lines.push(format!("company     : {company}"));
        }
        if let Some(price) = price {
            lines.push(format!("price       : {price:.2}"));
        }

        if let Some(analysis) = &stock.fundamental_analysis {
            let label = analysis.classification.as_deref().unwrap_or("N/A");
            lines.push(format!("rating      : {label} [{tone}]"));
            if let Some(total) = analysis.total_score {
                lines.push(format!("score       : {total}/14"));
            }
        }

        if let Some(fundamentals) = &stock.fundamentals {
            lines.push(format!(
                "market cap  : {}",
                format_magnitude(fundamentals.market_cap)
            ));
            lines.push(format!(
                "p/e ratio   : {}",
                format_magnitude(fundamentals.pe_ratio)
            ));
            lines.push(format!(
                "p/b ratio   : {}",
                format_magnitude(fundamentals.price_to_book)
            ));
            lines.push(format!(
                "roe         : {}",
                format_percent(fundamentals.return_on_equity)
            ));
            lines.push(format!(
                "div yield   : {}",
                format_percent(fundamentals.dividend_yield)
            ));
        }
    }

    if let Some(ai) = view.prediction.as_ref().and_then(|p| p.ai_recommendation.as_ref()) {
        let confidence = ai
            .confidence
            .map(|c| format!(" (confidence {})", format_percent(Some(c))))
            .unwrap_or_default();
        lines.push(format!("ai rec      : {}{confidence}", ai.recommendation));
        if let Some(reasoning) = &ai.reasoning {
            lines.push(format!("reasoning   : {reasoning}"));
        }
    }

    lines.push(format!(
        "chart       : {} window, {} bars",
        timeframe,
        chart.len()
    ));

    if !view.news.is_empty() {
        lines.push(String::from("news        :"));
        for item in &view.news {
            let source = item
                .source
                .as_ref()
                .and_then(|s| s.name.as_deref())
                .unwrap_or("unknown");
            lines.push(format!("  - {} ({source})", item.title));
        }
    }

    if let Some(message) = view.error.message() {
        lines.push(format!("error       : {message}"));
    }

    let failed = view.error.is_error();

    let data = json!({
        "symbol": symbol,
        "timeframe": timeframe,
        "latest_price": price,
        "rating_tone": tone,
        "chart_bars": chart.len(),
        "chart": chart,
        "stock": view.stock,
        "prediction": view.prediction,
        "news": view.news,
        "error": view.error,
    });

    Ok(CommandOutcome::ok(data, lines).with_failure(failed))
}
