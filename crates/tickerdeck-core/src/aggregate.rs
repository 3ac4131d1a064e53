//! Three-endpoint fan-out and view assembly.
//!
//! One fetch cycle issues the stock, predict, and news calls concurrently
//! and waits for all of them (a join, not a race). Transport failure of any
//! call discards every partial result; soft errors embedded in decoded
//! payloads are surfaced one at a time with fixed precedence.

use serde::{Serialize, Serializer};
use tracing::{info, warn};

use crate::api::{ApiClient, ApiError};
use crate::model::{NewsItem, NewsPayload, PredictionView, StockView};
use crate::Symbol;

/// Single generic message for any transport-level failure. Per-source detail
/// is logged, never rendered.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Unable to load stock data. Please try again or select a different stock.";

/// Error state of one fetch cycle: exactly one of nothing, a soft
/// application error surfaced verbatim, or the collapsed transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorState {
    None,
    Soft(String),
    Transport,
}

impl ErrorState {
    /// The single human-readable message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Soft(message) => Some(message),
            Self::Transport => Some(TRANSPORT_FAILURE_MESSAGE),
        }
    }

    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Serialize for ErrorState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.message() {
            Some(message) => serializer.serialize_some(message),
            None => serializer.serialize_none(),
        }
    }
}

/// Assembled view of one fetch cycle. Replaced wholesale per fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub stock: Option<StockView>,
    pub prediction: Option<PredictionView>,
    pub news: Vec<NewsItem>,
    pub error: ErrorState,
}

impl DashboardView {
    /// Empty view carrying the collapsed transport failure message. No
    /// partial rendering: every source field is absent.
    pub fn transport_failure() -> Self {
        Self {
            stock: None,
            prediction: None,
            news: Vec::new(),
            error: ErrorState::Transport,
        }
    }
}

/// Aggregator over the three dashboard endpoints.
#[derive(Clone)]
pub struct Dashboard {
    api: ApiClient,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetch stock data, prediction, and news for `symbol` in parallel and
    /// merge them into one view.
    ///
    /// Latency is bounded by the slowest of the three calls. Any
    /// transport-level rejection fails the whole cycle (all-or-nothing);
    /// nothing is cached and nothing is retried.
    pub async fn fetch_all(&self, symbol: &Symbol) -> DashboardView {
        let joined = tokio::try_join!(
            self.api.stock(symbol),
            self.api.predict(symbol),
            self.api.news(symbol),
        );

        match joined {
            Ok((stock, prediction, news_payload)) => {
                let error = soft_error(&stock, &prediction, &news_payload);
                let news = normalize_news(news_payload);
                info!(
                    symbol = %symbol,
                    bars = stock.prices.len(),
                    headlines = news.len(),
                    soft_error = error.is_error(),
                    "dashboard fetch cycle complete"
                );
                DashboardView {
                    stock: Some(stock),
                    prediction: Some(prediction),
                    news,
                    error,
                }
            }
            Err(error) => {
                warn!(symbol = %symbol, error = %error, "dashboard fetch cycle failed");
                DashboardView::transport_failure()
            }
        }
    }
}

/// Surface at most one soft error, precedence stock > prediction > news.
///
/// Only the empty string counts as absent, matching the truthiness checks
/// of the upstream contract; whitespace-only messages are surfaced as-is.
fn soft_error(stock: &StockView, prediction: &PredictionView, news: &NewsPayload) -> ErrorState {
    let sources = [
        stock.error.as_deref(),
        prediction.error.as_deref(),
        news.error.as_deref(),
    ];

    sources
        .into_iter()
        .flatten()
        .find(|message| !message.is_empty())
        .map(|message| ErrorState::Soft(message.to_owned()))
        .unwrap_or(ErrorState::None)
}

/// Pick the headline collection from a payload that may populate either
/// `articles` or `news`.
///
/// Explicit ordered fallback chain: the first present *and non-empty*
/// collection wins; an empty array is treated the same as an absent field.
fn normalize_news(mut payload: NewsPayload) -> Vec<NewsItem> {
    let accessors: [fn(&mut NewsPayload) -> Option<Vec<NewsItem>>; 2] =
        [|p| p.articles.take(), |p| p.news.take()];

    for take in accessors {
        if let Some(items) = take(&mut payload) {
            if !items.is_empty() {
                return items;
            }
        }
    }

    Vec::new()
}

/// Convenience used by ApiError callers that only care about the collapsed
/// user-facing state.
impl From<&ApiError> for ErrorState {
    fn from(_: &ApiError) -> Self {
        Self::Transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_owned(),
            url: String::from("https://example.test"),
            ..NewsItem::default()
        }
    }

    #[test]
    fn stock_error_takes_precedence() {
        let stock = StockView {
            error: Some(String::from("rate limit exceeded")),
            ..StockView::default()
        };
        let prediction = PredictionView {
            error: Some(String::from("model offline")),
            ..PredictionView::default()
        };
        let news = NewsPayload::default();

        let state = soft_error(&stock, &prediction, &news);
        assert_eq!(state, ErrorState::Soft(String::from("rate limit exceeded")));
        assert_eq!(state.message(), Some("rate limit exceeded"));
    }

    #[test]
    fn prediction_error_beats_news_error() {
        let stock = StockView::default();
        let prediction = PredictionView {
            error: Some(String::from("model offline")),
            ..PredictionView::default()
        };
        let news = NewsPayload {
            error: Some(String::from("no articles")),
            ..NewsPayload::default()
        };

        let state = soft_error(&stock, &prediction, &news);
        assert_eq!(state, ErrorState::Soft(String::from("model offline")));
    }

    #[test]
    fn empty_error_strings_count_as_absent() {
        let stock = StockView {
            error: Some(String::new()),
            ..StockView::default()
        };
        let news = NewsPayload {
            error: Some(String::from("no articles found")),
            ..NewsPayload::default()
        };
        let state = soft_error(&stock, &PredictionView::default(), &news);
        assert_eq!(state, ErrorState::Soft(String::from("no articles found")));

        let state = soft_error(
            &StockView::default(),
            &PredictionView::default(),
            &NewsPayload::default(),
        );
        assert_eq!(state, ErrorState::None);
        assert!(!state.is_error());
    }

    #[test]
    fn whitespace_error_strings_are_surfaced_verbatim() {
        let stock = StockView {
            error: Some(String::from("   ")),
            ..StockView::default()
        };
        let state = soft_error(&stock, &PredictionView::default(), &NewsPayload::default());
        assert_eq!(state, ErrorState::Soft(String::from("   ")));
    }

    #[test]
    fn normalize_prefers_non_empty_articles() {
        let payload = NewsPayload {
            articles: Some(vec![item("A")]),
            news: Some(vec![item("B")]),
            ..NewsPayload::default()
        };
        let titles: Vec<String> = normalize_news(payload).into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["A"]);
    }

    #[test]
    fn normalize_falls_through_empty_articles_to_news() {
        let payload = NewsPayload {
            articles: Some(Vec::new()),
            news: Some(vec![item("X")]),
            ..NewsPayload::default()
        };
        let titles: Vec<String> = normalize_news(payload).into_iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["X"]);
    }

    #[test]
    fn normalize_defaults_to_empty() {
        assert!(normalize_news(NewsPayload::default()).is_empty());
    }

    #[test]
    fn transport_view_carries_the_generic_message_and_no_data() {
        let view = DashboardView::transport_failure();
        assert!(view.stock.is_none());
        assert!(view.prediction.is_none());
        assert!(view.news.is_empty());
        assert_eq!(view.error.message(), Some(TRANSPORT_FAILURE_MESSAGE));
    }

    #[test]
    fn error_state_serializes_as_nullable_message() {
        let json = serde_json::to_string(&ErrorState::None).expect("serialize");
        assert_eq!(json, "null");

        let json =
            serde_json::to_string(&ErrorState::Soft(String::from("oops"))).expect("serialize");
        assert_eq!(json, "\"oops\"");
    }
}
