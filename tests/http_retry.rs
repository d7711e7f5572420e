//! Integration tests for the retrying HTTP layer and the sub-clients on top.
//!
//! Each test spins up a throwaway HTTP/1.1 responder on localhost that plays
//! back a scripted sequence of replies and counts the requests it receives.
//!
//! Run with:
//! ```bash
//! cargo test --test http_retry
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use coin_market_sdk::prelude::*;

#[derive(Clone)]
struct Reply {
    status: u16,
    body: String,
    headers: Vec<(&'static str, String)>,
    delay: Duration,
}

impl Reply {
    fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

fn reply(status: u16, body: impl Into<String>) -> Reply {
    Reply {
        status,
        body: body.into(),
        headers: Vec::new(),
        delay: Duration::ZERO,
    }
}

struct MockServer {
    url: String,
    hits: Arc<AtomicUsize>,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().unwrap().clone()
    }
}

/// Serve `script` in order; the last reply repeats once the script runs out.
async fn serve(script: Vec<Reply>) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let hits = Arc::new(AtomicUsize::new(0));
    let request_lines = Arc::new(Mutex::new(Vec::new()));

    let server_hits = hits.clone();
    let server_lines = request_lines.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let n = server_hits.fetch_add(1, Ordering::SeqCst);
            let reply = script[n.min(script.len() - 1)].clone();
            let lines = server_lines.clone();
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let read = socket.read(&mut chunk).await.unwrap_or(0);
                    if read == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..read]);
                    if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                if let Some(line) = String::from_utf8_lossy(&buf).lines().next() {
                    lines.lock().unwrap().push(line.to_string());
                }
                if !reply.delay.is_zero() {
                    tokio::time::sleep(reply.delay).await;
                }
                let extra: String = reply
                    .headers
                    .iter()
                    .map(|(name, value)| format!("{name}: {value}\r\n"))
                    .collect();
                let response = format!(
                    "HTTP/1.1 {} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n{}",
                    reply.status,
                    reply.body.len(),
                    extra,
                    reply.body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    MockServer {
        url,
        hits,
        request_lines,
    }
}

fn fast_retry() -> RetryConfig {
    RetryConfig {
        initial_delay: Duration::from_millis(5),
        ..RetryConfig::default()
    }
}

fn client_for(server: &MockServer) -> CoinClient {
    CoinClient::builder()
        .base_url(&server.url)
        .retry(fast_retry())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn coins_body(page: u32, coins: &[(&str, f64, f64)]) -> String {
    let data: Vec<_> = coins
        .iter()
        .enumerate()
        .map(|(i, (id, market_cap, change))| {
            json!({
                "productId": i + 1,
                "id": id,
                "name": id.to_uppercase(),
                "symbol": id,
                "image": format!("https://img.example/{id}.png"),
                "currentPrice": 1.25,
                "priceChangePercentage24h": change,
                "sparkline": [1.0, 2.0, 1.5],
                "marketCap": market_cap,
                "tradingVolume": null
            })
        })
        .collect();
    json!({
        "data": data,
        "page": page,
        "pageSize": 20,
        "totalItems": 200,
        "totalPages": 10
    })
    .to_string()
}

fn ids(coins: &[CoinSummary]) -> Vec<&str> {
    coins.iter().map(|c| c.id.as_str()).collect()
}

// ─── Retry policy ────────────────────────────────────────────────────────────

#[tokio::test]
async fn retryable_status_exhausts_all_attempts_then_returns_empty() {
    let server = serve(vec![reply(503, "unavailable")]).await;
    let client = client_for(&server);

    let url = client.http().coin_prices_url(1, 20);
    let coins = client.coins().fetch_page(&url).await;

    assert!(coins.is_empty());
    assert_eq!(server.hits(), 4);
}

#[tokio::test]
async fn every_retryable_status_is_retried() {
    for status in [403u16, 429, 500, 502, 503, 504] {
        let ok = reply(200, coins_body(1, &[("btc", 1.0, 0.0)]));
        let server = serve(vec![reply(status, ""), ok]).await;
        let client = client_for(&server);

        let page = client.coins().page(1, 20).await.unwrap();
        assert_eq!(ids(&page.items), ["btc"], "status {status}");
        assert_eq!(server.hits(), 2, "status {status}");
    }
}

#[tokio::test]
async fn terminal_status_is_not_retried() {
    let server = serve(vec![reply(404, "no such page")]).await;
    let client = client_for(&server);

    let err = client.coins().page(1, 20).await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::NotFound(_))));
    assert_eq!(server.hits(), 1);

    let server = serve(vec![reply(400, "bad")]).await;
    let client = client_for(&server);
    assert!(client.ohlc().fetch(&ProductId::from("1"), Timeframe::OneDay).await.is_empty());
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn strict_fetch_reports_exhausted_retries() {
    let server = serve(vec![reply(502, "bad gateway")]).await;
    let client = client_for(&server);

    let err = client.coins().page(1, 20).await.unwrap_err();
    match err {
        SdkError::Http(HttpError::MaxRetriesExceeded { attempts, last_error }) => {
            assert_eq!(attempts, 4);
            assert_eq!(last_error.status(), Some(502));
        }
        other => panic!("expected MaxRetriesExceeded, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_not_retried_and_yields_empty() {
    let server = serve(vec![reply(200, "{ not json")]).await;
    let client = client_for(&server);

    let url = client.http().coin_prices_url(1, 20);
    assert!(client.coins().fetch_page(&url).await.is_empty());
    assert_eq!(server.hits(), 1);

    let err = client.coins().page(1, 20).await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::Parse(_))));
}

#[tokio::test]
async fn transport_failure_is_retried_then_empty() {
    // Grab a free port, then close it so connections are refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = CoinClient::builder()
        .base_url(&url)
        .retry(fast_retry().with_max_retries(2))
        .build()
        .unwrap();

    let err = client
        .ohlc()
        .get(&ProductId::from("1"), Timeframe::OneDay)
        .await
        .unwrap_err();
    match err {
        SdkError::Http(HttpError::MaxRetriesExceeded { attempts, last_error }) => {
            assert_eq!(attempts, 3);
            assert!(matches!(*last_error, HttpError::Reqwest(_)));
        }
        other => panic!("expected MaxRetriesExceeded, got {other:?}"),
    }

    assert!(client.ohlc().fetch(&ProductId::from("1"), Timeframe::OneDay).await.is_empty());
}

#[tokio::test]
async fn oversized_retry_after_does_not_panic() {
    let server = serve(vec![
        reply(429, "").header("Retry-After", "99999999999999999"),
        reply(200, coins_body(1, &[("btc", 1.0, 0.0)])),
    ])
    .await;
    let client = CoinClient::builder()
        .base_url(&server.url)
        .retry(RetryConfig {
            max_delay: Duration::from_millis(50),
            ..fast_retry()
        })
        .build()
        .unwrap();

    let url = client.http().coin_prices_url(1, 20);
    let fetch = tokio::spawn(async move { client.coins().fetch_page(&url).await });
    let coins = tokio::time::timeout(Duration::from_secs(3), fetch)
        .await
        .expect("fetch stalled")
        .expect("fetch task panicked");

    assert_eq!(ids(&coins), ["btc"]);
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn retry_after_is_capped_by_max_delay() {
    let server = serve(vec![
        reply(429, "").header("Retry-After", "3600"),
        reply(200, coins_body(1, &[("eth", 1.0, 0.0)])),
    ])
    .await;
    let client = CoinClient::builder()
        .base_url(&server.url)
        .retry(RetryConfig {
            max_delay: Duration::from_millis(50),
            ..fast_retry()
        })
        .build()
        .unwrap();

    let url = client.http().coin_prices_url(1, 20);
    let coins = tokio::time::timeout(Duration::from_secs(3), client.coins().fetch_page(&url))
        .await
        .expect("Retry-After wait exceeded max_delay");

    assert_eq!(ids(&coins), ["eth"]);
}

#[tokio::test]
async fn per_call_retry_policy_overrides_client_config() {
    let server = serve(vec![reply(503, "busy")]).await;
    let client = client_for(&server);
    let url = client.http().coin_prices_url(1, 20);

    let err = client
        .http()
        .get::<serde_json::Value>(&url, RetryPolicy::None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(server.hits(), 1);

    let custom = RetryConfig::default()
        .with_max_retries(1)
        .with_initial_delay(Duration::from_millis(5));
    let err = client
        .http()
        .get::<serde_json::Value>(&url, RetryPolicy::Custom(custom))
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::MaxRetriesExceeded { attempts: 2, .. }));
    assert_eq!(server.hits(), 3);
}

// ─── OHLC ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ohlc_fetch_parses_bars_and_sends_params() {
    let body = json!([
        {"date": 1700000000000i64, "usd": {"open": 10, "high": 12, "low": 9, "close": 11},
         "aed": {"open": 36.7, "high": 44.0, "low": 33.0, "close": 40.4}},
        {"date": 1700003600000i64, "usd": {"open": 11, "high": 13, "low": 10, "close": 12}}
    ])
    .to_string();
    let server = serve(vec![reply(200, body)]).await;
    let client = client_for(&server);

    let bars = client.ohlc().fetch(&ProductId::from("bitcoin"), Timeframe::OneWeek).await;
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].usd_close, 11.0);
    assert_eq!(bars[1].aed_open, 0.0);

    let line = &server.request_lines()[0];
    assert!(line.starts_with("GET /coin-ohlc?productId=bitcoin&days=7 "), "{line}");
}

#[tokio::test]
async fn ohlc_load_applies_to_state() {
    let body = json!([{"date": 1, "usd": {"open": 1, "high": 2, "low": 0.5, "close": 1.5}}]);
    let body = body.to_string();
    let server = serve(vec![reply(200, body)]).await;
    let client = client_for(&server);

    let mut state = OhlcState::new();
    assert!(client.ohlc().load(&mut state, ProductId::from("1"), Timeframe::All).await);
    assert_eq!(state.bars().len(), 1);
    assert!(!state.is_loading());
    assert_eq!(OhlcStats::from_bars(state.bars()).unwrap().open, 1.0);
}

// ─── Coin list + pagination ──────────────────────────────────────────────────

#[tokio::test]
async fn tab_fetches_first_page_of_hundred_and_ranks() {
    let body = coins_body(1, &[("a", 10.0, 3.0), ("b", 30.0, -4.0), ("c", 20.0, 9.0)]);
    let server = serve(vec![reply(200, body)]).await;
    let client = client_for(&server);

    let featured = client.coins().tab(MarketTab::Featured).await;
    let losers = client.coins().tab(MarketTab::TopLosers).await;

    assert_eq!(ids(&featured), ["b", "c", "a"]);
    assert_eq!(ids(&losers), ["b", "a", "c"]);
    assert!(server.request_lines()[0].contains("page=1&pageSize=100"));
}

#[tokio::test]
async fn load_more_twice_before_resolution_sends_one_request() {
    let server = serve(vec![reply(200, coins_body(1, &[("a", 1.0, 0.0)]))]).await;
    let client = client_for(&server);
    let mut state = CoinListState::new();

    let first = state.begin_load_more();
    let second = state.begin_load_more();
    assert!(second.is_none());

    let request = first.unwrap();
    let items = client.coins().fetch_for(&request).await;
    assert!(state.apply_page(request, items));

    assert_eq!(server.hits(), 1);
    assert_eq!(ids(state.coins()), ["a"]);
}

#[tokio::test]
async fn pagination_appends_until_empty_page() {
    let server = serve(vec![
        reply(200, coins_body(1, &[("a", 1.0, 0.0), ("b", 1.0, 0.0)])),
        reply(200, coins_body(2, &[("c", 1.0, 0.0)])),
        reply(200, coins_body(3, &[])),
    ])
    .await;
    let client = client_for(&server);
    let mut state = CoinListState::new();

    assert!(client.coins().load_page(&mut state, 1).await);
    assert!(client.coins().load_more(&mut state).await);
    assert!(client.coins().load_more(&mut state).await);
    assert!(!state.has_more());

    assert!(!client.coins().load_more(&mut state).await);
    assert_eq!(server.hits(), 3);
    assert_eq!(ids(state.coins()), ["a", "b", "c"]);

    let lines = server.request_lines();
    assert!(lines[1].contains("page=2&pageSize=20"), "{}", lines[1]);
}

#[tokio::test]
async fn cancelled_load_more_releases_guard() {
    let server = serve(vec![
        reply(200, coins_body(1, &[("slow", 1.0, 0.0)])).after(Duration::from_millis(500)),
        reply(200, coins_body(1, &[("a", 1.0, 0.0)])),
    ])
    .await;
    let client = client_for(&server);
    let mut state = CoinListState::new();

    let timed_out =
        tokio::time::timeout(Duration::from_millis(50), client.coins().load_more(&mut state)).await;
    assert!(timed_out.is_err());
    assert!(!state.is_loading());

    assert!(client.coins().load_more(&mut state).await);
    assert_eq!(ids(state.coins()), ["a"]);
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn search_suspends_load_more() {
    let body = coins_body(1, &[("btc", 1.0, 0.0), ("eth", 1.0, 0.0)]);
    let server = serve(vec![reply(200, body)]).await;
    let client = client_for(&server);
    let mut state = CoinListState::new();

    client.coins().load_page(&mut state, 1).await;
    state.set_query("ETH");

    assert!(!client.coins().load_more(&mut state).await);
    assert_eq!(server.hits(), 1);
    assert_eq!(ids(state.filtered()), ["eth"]);
}
