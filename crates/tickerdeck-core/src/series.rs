//! Price-series timeframe reduction and chart-data preparation.
//!
//! The backend ships daily bars most-recent-first. Charting needs the
//! window the user asked for, oldest-first. Everything here is a pure,
//! single-pass transformation; no function mutates its input.

use crate::model::{PriceBar, StockView};
use crate::{Timeframe, TradingDate};

/// Filter `bars` down to the requested lookback window.
///
/// Keeps every bar dated on or after `today - lookback_days`, preserving the
/// original relative order. An empty result is a renderable empty state, not
/// an error.
pub fn select_timeframe(bars: &[PriceBar], timeframe: Timeframe, today: TradingDate) -> Vec<PriceBar> {
    let cutoff = today.minus_days(timeframe.lookback_days());
    bars.iter()
        .filter(|bar| bar.date >= cutoff)
        .cloned()
        .collect()
}

/// Reverse a most-recent-first series into chronological order for charting.
///
/// This is a structural reverse, not a sort: if the upstream ordering
/// assumption is violated, the output order is simply wrong.
pub fn to_chronological(mut bars: Vec<PriceBar>) -> Vec<PriceBar> {
    bars.reverse();
    bars
}

/// Latest price for the header display.
///
/// Fixed precedence: close of the newest bar, else the scalar `price`
/// field, else nothing.
pub fn latest_price(stock: &StockView) -> Option<f64> {
    stock
        .prices
        .first()
        .map(|bar| bar.close)
        .or(stock.price)
}
