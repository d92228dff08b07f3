// Integration tests for the Finnhub quote provider against a local mock server

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use ticker_digest::config::HttpConfig;
    use ticker_digest::feed::finnhub::Finnhub;
    use ticker_digest::feed::QuoteFeed;
    use ticker_digest::pipeline::{collect_stocks, fetch_ticker, FetchOutcome};

    const KEY: &str = "test-key";

    const QUOTE: &str = r#"{"c":182.456,"d":1.2,"dp":0.6789,"h":183.0,"l":180.1,"o":181.0,"pc":181.254,"t":1760600000}"#;
    const PROFILE: &str = r#"{"country":"US","currency":"USD","marketCapitalization":4460000.0,"name":"NVIDIA Corp","ticker":"NVDA"}"#;

    fn client(server: &MockServer) -> Finnhub {
        Finnhub::new(KEY.to_string(), &server.base_url(), &HttpConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_stock_builds_record() {
        let server = MockServer::start();
        let quote = server.mock(|when, then| {
            when.method(GET)
                .path("/quote")
                .query_param("symbol", "NVDA")
                .query_param("token", KEY);
            then.status(200)
                .header("content-type", "application/json")
                .body(QUOTE);
        });
        let profile = server.mock(|when, then| {
            when.method(GET)
                .path("/stock/profile2")
                .query_param("symbol", "NVDA")
                .query_param("token", KEY);
            then.status(200)
                .header("content-type", "application/json")
                .body(PROFILE);
        });

        let record = client(&server).fetch_stock("NVDA").await.unwrap();

        quote.assert();
        profile.assert();
        assert_eq!(record.ticker, "NVDA");
        assert_eq!(record.name, "NVIDIA Corp");
        assert_eq!(record.price, 182.46);
        assert_eq!(record.change, 0.68);
        assert_eq!(record.previous_close, Some(181.25));
        assert_eq!(record.market_cap, "4.5T");
    }

    #[tokio::test]
    async fn test_profile_error_status_fails_ticker() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/quote");
            then.status(200).body(QUOTE);
        });
        server.mock(|when, then| {
            when.method(GET).path("/stock/profile2");
            then.status(429).body("API limit reached");
        });

        let err = client(&server).fetch_stock("NVDA").await.unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("429"), "unexpected error: {}", msg);
        assert!(!msg.contains(KEY), "error leaked the API key: {}", msg);
    }

    #[tokio::test]
    async fn test_empty_profile_fails_ticker() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/quote");
            then.status(200).body(r#"{"c":0,"d":null,"dp":null,"h":0,"l":0,"o":0,"pc":0,"t":0}"#);
        });
        server.mock(|when, then| {
            when.method(GET).path("/stock/profile2");
            then.status(200).body("{}");
        });

        let outcome = fetch_ticker(&client(&server), "ZZZZ").await;
        assert!(outcome.is_skipped());
    }

    #[tokio::test]
    async fn test_malformed_quote_fails_without_profile_call() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/quote");
            then.status(200).body("<html>maintenance</html>");
        });
        let profile = server.mock(|when, then| {
            when.method(GET).path("/stock/profile2");
            then.status(200).body(PROFILE);
        });

        let outcome = fetch_ticker(&client(&server), "NVDA").await;
        assert!(matches!(outcome, FetchOutcome::Skipped { .. }));
        assert_eq!(profile.calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_ticker_is_skipped_others_kept() {
        let server = MockServer::start();
        for sym in ["NVDA", "MSFT"] {
            server.mock(|when, then| {
                when.method(GET).path("/quote").query_param("symbol", sym);
                then.status(200).body(QUOTE);
            });
            server.mock(|when, then| {
                when.method(GET).path("/stock/profile2").query_param("symbol", sym);
                then.status(200).body(PROFILE);
            });
        }
        server.mock(|when, then| {
            when.method(GET).path("/quote").query_param("symbol", "BAD");
            then.status(500).body("boom");
        });

        let tickers: Vec<String> = ["NVDA", "BAD", "MSFT"].iter().map(|s| s.to_string()).collect();
        let stocks = collect_stocks(&client(&server), &tickers).await;

        let got: Vec<&str> = stocks.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(got, vec!["NVDA", "MSFT"]);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_skipped() {
        let finnhub = Finnhub::new(
            KEY.to_string(),
            "http://127.0.0.1:1",
            &HttpConfig { request_timeout_ms: 500, ..HttpConfig::default() },
        )
        .unwrap();
        let stocks = collect_stocks(&finnhub, &["NVDA".to_string()]).await;
        assert!(stocks.is_empty());
    }
}
