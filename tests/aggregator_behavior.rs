//! Behavior-driven tests for the dashboard fetch cycle
//!
//! These tests verify HOW one fetch cycle behaves end to end: parallel
//! fan-out over the three endpoints, all-or-nothing transport failure,
//! soft-error precedence, and stale-result discarding.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tickerdeck_core::{
    ApiClient, Dashboard, DashboardSession, ErrorState, HttpClient, HttpError, HttpRequest,
    HttpResponse, Symbol, TRANSPORT_FAILURE_MESSAGE,
};

/// Routes each request to a canned reply by URL fragment. Order matters:
/// the first matching route wins.
struct ScriptedBackend {
    routes: Vec<(&'static str, Result<HttpResponse, HttpError>)>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new(routes: Vec<(&'static str, Result<HttpResponse, HttpError>)>) -> Arc<Self> {
        Arc::new(Self {
            routes,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for ScriptedBackend {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request.url.clone());

        let reply = self
            .routes
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| Err(HttpError::new(format!("no route for {}", request.url))));

        Box::pin(async move { reply })
    }
}

fn ok(body: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::ok_json(body))
}

fn dashboard(backend: Arc<ScriptedBackend>) -> Dashboard {
    let api = ApiClient::new(backend as Arc<dyn HttpClient>, "http://backend.test");
    Dashboard::new(api)
}

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

// =============================================================================
// Fetch Cycle: Successful Fan-Out
// =============================================================================

#[tokio::test]
async fn when_all_endpoints_succeed_view_carries_every_section() {
    // Given: A backend where all three endpoints answer
    let backend = ScriptedBackend::new(vec![
        (
            "/api/predict/",
            ok(r#"{"symbol":"TCS","ai_recommendation":{"recommendation":"BUY","confidence":0.82}}"#),
        ),
        (
            "/api/news/",
            ok(r#"{"articles":[{"title":"Quarterly results","url":"https://example.test/a"}]}"#),
        ),
        (
            "/api/stock/",
            ok(r#"{"symbol":"TCS","company_name":"Tata Consultancy Services","price":3900.5,
                "prices":[{"date":"2024-06-03","open":3890.0,"high":3910.0,"low":3880.0,"close":3900.5}]}"#),
        ),
    ]);

    // When: One fetch cycle runs
    let view = dashboard(Arc::clone(&backend)).fetch_all(&symbol("TCS")).await;

    // Then: Every section is populated and no error is carried
    let stock = view.stock.expect("stock section should be present");
    assert_eq!(stock.company_name.as_deref(), Some("Tata Consultancy Services"));
    assert_eq!(stock.prices.len(), 1);

    let prediction = view.prediction.expect("prediction section should be present");
    let ai = prediction.ai_recommendation.expect("ai recommendation should be present");
    assert_eq!(ai.recommendation, "BUY");

    assert_eq!(view.news.len(), 1);
    assert_eq!(view.news[0].title, "Quarterly results");

    assert_eq!(view.error, ErrorState::None);
    assert!(view.error.message().is_none());
}

#[tokio::test]
async fn one_fetch_cycle_issues_exactly_one_request_per_endpoint() {
    // Given: A backend that answers every endpoint
    let backend = ScriptedBackend::new(vec![
        ("/api/predict/", ok("{}")),
        ("/api/news/", ok("{}")),
        ("/api/stock/", ok("{}")),
    ]);

    // When: One fetch cycle runs
    dashboard(Arc::clone(&backend)).fetch_all(&symbol("INFY")).await;

    // Then: All three endpoints were hit, each exactly once
    let mut urls = backend.requested_urls();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            String::from("http://backend.test/api/news/INFY"),
            String::from("http://backend.test/api/predict/INFY"),
            String::from("http://backend.test/api/stock/INFY"),
        ]
    );
}

// =============================================================================
// Fetch Cycle: All-Or-Nothing Transport Failure
// =============================================================================

#[tokio::test]
async fn when_one_endpoint_rejects_no_partial_data_survives() {
    // Given: Stock and predict answer, but news fails at the network level
    let backend = ScriptedBackend::new(vec![
        ("/api/predict/", ok(r#"{"symbol":"TCS"}"#)),
        ("/api/news/", Err(HttpError::new("connection refused"))),
        ("/api/stock/", ok(r#"{"symbol":"TCS","price":3900.5}"#)),
    ]);

    // When: One fetch cycle runs
    let view = dashboard(backend).fetch_all(&symbol("TCS")).await;

    // Then: The successful payloads are discarded too
    assert!(view.stock.is_none(), "no partial stock data");
    assert!(view.prediction.is_none(), "no partial prediction data");
    assert!(view.news.is_empty(), "no partial news data");

    // And: Only the generic message is surfaced, never the network detail
    assert_eq!(view.error, ErrorState::Transport);
    assert_eq!(view.error.message(), Some(TRANSPORT_FAILURE_MESSAGE));
}

#[tokio::test]
async fn when_an_endpoint_returns_5xx_the_cycle_collapses_the_same_way() {
    // Given: The predict endpoint answers 503
    let backend = ScriptedBackend::new(vec![
        (
            "/api/predict/",
            Ok(HttpResponse {
                status: 503,
                body: String::new(),
            }),
        ),
        ("/api/news/", ok("{}")),
        ("/api/stock/", ok("{}")),
    ]);

    // When: One fetch cycle runs
    let view = dashboard(backend).fetch_all(&symbol("TCS")).await;

    // Then: A non-2xx status is a transport-level failure for the cycle
    assert!(view.stock.is_none());
    assert_eq!(view.error.message(), Some(TRANSPORT_FAILURE_MESSAGE));
}

#[tokio::test]
async fn when_a_payload_is_undecodable_the_cycle_collapses_the_same_way() {
    // Given: The stock endpoint answers 200 with a non-JSON body
    let backend = ScriptedBackend::new(vec![
        ("/api/predict/", ok("{}")),
        ("/api/news/", ok("{}")),
        ("/api/stock/", ok("<html>gateway error</html>")),
    ]);

    // When: One fetch cycle runs
    let view = dashboard(backend).fetch_all(&symbol("TCS")).await;

    // Then: The cycle fails whole, with the generic message
    assert!(view.prediction.is_none());
    assert_eq!(view.error, ErrorState::Transport);
}

// =============================================================================
// Fetch Cycle: Soft-Error Precedence
// =============================================================================

#[tokio::test]
async fn when_payloads_carry_soft_errors_stock_wins_and_data_still_renders() {
    // Given: All calls succeed, but stock and news each embed an error field
    let backend = ScriptedBackend::new(vec![
        ("/api/predict/", ok(r#"{"symbol":"TCS"}"#)),
        ("/api/news/", ok(r#"{"error":"no articles found"}"#)),
        (
            "/api/stock/",
            ok(r#"{"symbol":"TCS","price":3900.5,"error":"rate limit exceeded"}"#),
        ),
    ]);

    // When: One fetch cycle runs
    let view = dashboard(backend).fetch_all(&symbol("TCS")).await;

    // Then: The stock message is surfaced verbatim, and only that one
    assert_eq!(
        view.error,
        ErrorState::Soft(String::from("rate limit exceeded"))
    );

    // And: The decoded payloads are still applied alongside the message
    let stock = view.stock.expect("soft errors do not discard data");
    assert_eq!(stock.price, Some(3900.5));
}

#[tokio::test]
async fn when_only_news_carries_a_soft_error_it_is_surfaced() {
    // Given: Only the news payload embeds an error field
    let backend = ScriptedBackend::new(vec![
        ("/api/predict/", ok("{}")),
        ("/api/news/", ok(r#"{"error":"no articles found"}"#)),
        ("/api/stock/", ok("{}")),
    ]);

    // When: One fetch cycle runs
    let view = dashboard(backend).fetch_all(&symbol("TCS")).await;

    // Then: The lowest-precedence source still gets its message through
    assert_eq!(
        view.error,
        ErrorState::Soft(String::from("no articles found"))
    );
}

// =============================================================================
// Fetch Cycle: News Normalization
// =============================================================================

#[tokio::test]
async fn when_articles_is_empty_the_news_field_is_used_instead() {
    // Given: A payload with an empty `articles` array and a populated `news`
    let backend = ScriptedBackend::new(vec![
        ("/api/predict/", ok("{}")),
        (
            "/api/news/",
            ok(r#"{"articles":[],"news":[{"title":"Fallback headline","url":"https://example.test/b"}]}"#),
        ),
        ("/api/stock/", ok("{}")),
    ]);

    // When: One fetch cycle runs
    let view = dashboard(backend).fetch_all(&symbol("TCS")).await;

    // Then: The empty collection is treated the same as an absent field
    let titles: Vec<&str> = view.news.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Fallback headline"]);
}

// =============================================================================
// Fetch Cycle: Stale Results Never Overwrite Fresh Ones
// =============================================================================

#[tokio::test]
async fn when_the_symbol_changes_mid_flight_the_older_result_is_discarded() {
    // Given: A session and two backends answering for different symbols
    let first_backend = ScriptedBackend::new(vec![
        ("/api/predict/", ok("{}")),
        ("/api/news/", ok("{}")),
        ("/api/stock/", ok(r#"{"symbol":"TCS"}"#)),
    ]);
    let second_backend = ScriptedBackend::new(vec![
        ("/api/predict/", ok("{}")),
        ("/api/news/", ok("{}")),
        ("/api/stock/", ok(r#"{"symbol":"INFY"}"#)),
    ]);

    let mut session = DashboardSession::new(symbol("TCS"));

    // When: A second fetch is issued before the first one lands
    let stale_ticket = session.begin_fetch(symbol("TCS"));
    let fresh_ticket = session.begin_fetch(symbol("INFY"));

    let fresh_view = dashboard(second_backend).fetch_all(&symbol("INFY")).await;
    let stale_view = dashboard(first_backend).fetch_all(&symbol("TCS")).await;

    // And: Results land out of order
    assert!(session.apply(fresh_ticket, fresh_view));
    assert!(!session.apply(stale_ticket, stale_view));

    // Then: The session shows the fresh symbol's view
    let applied = session.view().expect("fresh view should be applied");
    let stock = applied.stock.as_ref().expect("stock section");
    assert_eq!(stock.symbol.as_deref(), Some("INFY"));
}
