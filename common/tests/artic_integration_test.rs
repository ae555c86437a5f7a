use artwork_browser_common::{build_page_url, parse_artwork_page, BrowserConfig, Page};

#[tokio::test]
async fn artic_artworks_page_integration() {
    if std::env::var("ARTIC_LIVE_TEST").map(|v| v.trim().is_empty()).unwrap_or(true) {
        eprintln!("ARTIC_LIVE_TEST not set; skipping integration test");
        return;
    }

    let config = BrowserConfig::default();
    let page = Page::new(2).unwrap();
    let url = build_page_url(&config.api_url, page, None);

    let response = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .expect("request failed");

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        panic!("artic api failed with status {}: {}", status, text);
    }

    let body = response.text().await.expect("response body missing");
    let artworks = parse_artwork_page(&body).expect("failed to parse artworks page");

    assert!(artworks.pagination.total > 0);
    assert!(!artworks.data.is_empty());
    assert_eq!(artworks.pagination.current_page, Some(2));
}
