//! Upstream-shaped view models for the dashboard backend.
//!
//! These structs mirror the JSON the backend actually sends, so most fields
//! are optional and collections default to empty. Each value is request
//! scoped: a fetch cycle replaces the previous view wholesale, nothing is
//! mutated in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TradingDate;

/// One daily OHLCV bar.
///
/// The `low <= open,close <= high` invariant is assumed from upstream and
/// deliberately not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: TradingDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

/// Payload of `GET /api/stock/{symbol}`.
///
/// `prices` arrives most-recent-first; `error` is a soft application error
/// inside a successful transport response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StockView {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub prices: Vec<PriceBar>,
    #[serde(default)]
    pub fundamentals: Option<FundamentalsData>,
    #[serde(default)]
    pub fundamental_analysis: Option<AnalysisResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Financial ratio snapshot supplied by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FundamentalsData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub price_to_book: Option<f64>,
    #[serde(default)]
    pub return_on_equity: Option<f64>,
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
    #[serde(default)]
    pub dividend_yield: Option<f64>,
    #[serde(default)]
    pub book_value: Option<f64>,
    #[serde(default)]
    pub high_52w: Option<f64>,
    #[serde(default)]
    pub low_52w: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub industry_pe: Option<f64>,
}

/// Backend-computed fundamental rating (scores per metric are 0..=2).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub scores: BTreeMap<String, i64>,
    #[serde(default)]
    pub total_score: Option<i64>,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Payload of `GET /api/predict/{symbol}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionView {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub basic_recommendation: Option<BasicRecommendation>,
    #[serde(default)]
    pub ai_recommendation: Option<AiRecommendation>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Indicator-driven recommendation computed server-side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BasicRecommendation {
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// AI buy/sell/hold recommendation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AiRecommendation {
    pub recommendation: String,
    /// Model confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

/// Payload of `GET /api/news/{symbol}`.
///
/// Items may arrive under `articles` or `news`; consumers must accept
/// either. See [`crate::aggregate`] for the normalization rule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewsPayload {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub articles: Option<Vec<NewsItem>>,
    #[serde(default)]
    pub news: Option<Vec<NewsItem>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One news headline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<NewsSource>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewsSource {
    #[serde(default)]
    pub name: Option<String>,
}

/// One row of `GET /api/stock/search?query=`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchMatch {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}
