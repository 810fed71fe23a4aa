use reqwest::header::CONTENT_TYPE;

#[derive(Debug, Clone)]
pub struct FetchedFeed {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
}

pub async fn fetch_feed(client: &reqwest::Client, url: &str) -> Result<FetchedFeed, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    let body = response.bytes().await?.to_vec();
    tracing::debug!(url, bytes = body.len(), "fetched feed payload");

    Ok(FetchedFeed { body, content_type })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::Response;
    use axum::routing::get;
    use axum::Router;

    async fn feed_handler() -> Response {
        let mut response = Response::new(axum::body::Body::from(
            include_str!("../../../fixtures/sample.rss.xml").to_string(),
        ));
        *response.status_mut() = StatusCode::OK;
        response.headers_mut().insert(
            CONTENT_TYPE,
            "application/rss+xml".parse().expect("header must parse"),
        );
        response
    }

    async fn failing_handler() -> Response {
        let mut response = Response::new(axum::body::Body::from("temporary failure".to_string()));
        *response.status_mut() = StatusCode::SERVICE_UNAVAILABLE;
        response
    }

    async fn spawn_test_server() -> (String, tokio::task::JoinHandle<()>) {
        let app = Router::new()
            .route("/feed.xml", get(feed_handler))
            .route("/broken.xml", get(failing_handler));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        (format!("http://{address}"), join_handle)
    }

    #[tokio::test]
    async fn fetch_feed_returns_body_and_content_type() {
        let (base_url, server_task) = spawn_test_server().await;
        let client = reqwest::Client::new();

        let fetched = fetch_feed(&client, &format!("{base_url}/feed.xml"))
            .await
            .expect("fetch should succeed");
        assert!(fetched.body.starts_with(b"<?xml"));
        assert_eq!(fetched.content_type.as_deref(), Some("application/rss+xml"));

        server_task.abort();
    }

    #[tokio::test]
    async fn fetch_feed_reports_non_success_status() {
        let (base_url, server_task) = spawn_test_server().await;
        let client = reqwest::Client::new();

        let error = fetch_feed(&client, &format!("{base_url}/broken.xml"))
            .await
            .expect_err("503 must surface as an error");
        assert!(matches!(error, FetchError::HttpStatus(503)));

        let missing = fetch_feed(&client, &format!("{base_url}/missing.xml"))
            .await
            .expect_err("404 must surface as an error");
        assert!(matches!(missing, FetchError::HttpStatus(404)));

        server_task.abort();
    }
}
