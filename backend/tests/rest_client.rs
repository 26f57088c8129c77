use std::time::Duration;

use backend::config::StorefrontConfig;
use backend::db_utils::postgrest_utils::RestClient;
use backend::api::catalog_queries::category_search_query;
use common::catalog::CategorySummary;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answers a single request with `status` and `body`; yields the request head.
async fn one_shot_server(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0_u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        String::from_utf8_lossy(&head).to_string()
    });
    (base_url, handle)
}

fn config_with_key() -> StorefrontConfig {
    StorefrontConfig {
        rest_url: None,
        api_key: Some("anon-key".to_string()),
        fixture_path: None,
        request_timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn sends_query_parameters_and_api_key() {
    let (base_url, server) = one_shot_server("200 OK", r#"[{"id": 2, "name": "Wall Tiles", "slug": "wall-tiles"}]"#).await;
    let client = RestClient::new(base_url, &config_with_key()).unwrap();

    let rows = client.postgrest_select::<CategorySummary>(&category_search_query("wall", 3)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].slug, "wall-tiles");

    let head = server.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert!(request_line.starts_with("GET /categories?select=id%2Cname%2Cslug"));
    assert!(request_line.contains("order=name.asc"));
    assert!(request_line.contains("limit=3"));
    assert!(head.to_lowercase().contains("apikey: anon-key"));
    assert!(head.contains("Bearer anon-key"));
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let (base_url, server) = one_shot_server("200 OK", r#"{"message": "not a list"}"#).await;
    let client = RestClient::new(base_url, &config_with_key()).unwrap();
    let err = client.postgrest_select::<CategorySummary>(&category_search_query("wall", 3)).await.unwrap_err();
    assert!(format!("{err:#}").contains("malformed response from table categories"));
    server.await.unwrap();
}

#[tokio::test]
async fn error_status_is_an_error() {
    let (base_url, server) = one_shot_server("401 Unauthorized", r#"{"message": "JWT expired"}"#).await;
    let client = RestClient::new(base_url, &config_with_key()).unwrap();
    let err = client.postgrest_select::<CategorySummary>(&category_search_query("wall", 3)).await.unwrap_err();
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("JWT expired"));
    server.await.unwrap();
}
