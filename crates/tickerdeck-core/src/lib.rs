//! Core contracts for tickerdeck.
//!
//! This crate contains:
//! - Canonical domain types (symbol, timeframe, trading date)
//! - Upstream-shaped view models for the dashboard backend
//! - The three-endpoint aggregator and its error taxonomy
//! - Chart series reduction and fundamentals display formatting

pub mod aggregate;
pub mod api;
pub mod domain;
pub mod error;
pub mod format;
pub mod http;
pub mod model;
pub mod series;
pub mod session;

pub use aggregate::{Dashboard, DashboardView, ErrorState, TRANSPORT_FAILURE_MESSAGE};
pub use api::{ApiClient, ApiError, ApiErrorKind, DEFAULT_BASE_URL};
pub use domain::{Symbol, Timeframe, TradingDate};
pub use error::{CoreError, ValidationError};
pub use format::{classify, format_magnitude, format_percent, Tone};
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use model::{
    AiRecommendation, AnalysisResult, BasicRecommendation, FundamentalsData, NewsItem,
    NewsPayload, NewsSource, PredictionView, PriceBar, SearchMatch, StockView,
};
pub use series::{latest_price, select_timeframe, to_chronological};
pub use session::{DashboardSession, FetchTicket};
