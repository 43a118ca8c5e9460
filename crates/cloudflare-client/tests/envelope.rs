//! End-to-end envelope handling over HTTP.

use cloudflare_client::{
    CloudflareClient, CloudflareError, Credentials, FormParams, HttpTransport, CONTENT_TYPE_FORM,
};
use cloudflare_core::IpClass;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CloudflareClient {
    CloudflareClient::builder(Credentials::new("t0k", "ops@example.com").with_host_keys("hk", "uk"))
        .base_url(format!("{}/api_json.html", server.uri()))
        .host_base_url(format!("{}/host-gw.html", server.uri()))
        .user_agent("cloudflare-it/1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn stats_success_roundtrip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api_json.html"))
        .and(header("content-type", CONTENT_TYPE_FORM))
        .and(header("user-agent", "cloudflare-it/1"))
        .and(body_string_contains("a=stats&z=example.com&interval=100"))
        .and(body_string_contains("tkn=t0k"))
        .and(body_string_contains("email=ops%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "msg": null,
            "response": {"result": {
                "timeZero": 1_365_724_800_000_i64,
                "timeEnd": 1_365_811_200_000_i64,
                "count": 1,
                "has_more": false,
                "objs": [{
                    "trafficBreakdown": {"pageviews": {"regular": 5, "threat": 0, "crawler": 1}},
                    "requestsServed": {"cloudflare": 9, "user": 1}
                }]
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = client.client_api().stats("example.com", 100).await.unwrap();

    assert_eq!(stats.count, 1);
    assert!(!stats.has_more);
    assert_eq!(stats.objects.len(), 1);
    let served = stats.objects[0].requests_served.unwrap();
    assert_eq!(served.cloudflare, 9);
    assert_eq!(served.user, 1);
}

#[tokio::test]
async fn malformed_stats_payload_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "response": "weird"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.client_api().stats("example.com", 20).await.unwrap_err();
    assert!(matches!(err, CloudflareError::Decode(_)));
}

#[tokio::test]
async fn zone_check_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("a=zone_check"))
        .and(body_string_contains("zones=a.com%2Cb.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "error",
            "msg": "invalid zone"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .client_api()
        .zone_check(&["a.com", "b.com"])
        .await
        .unwrap_err();

    assert!(err.is_api());
    let text = err.to_string();
    assert!(text.starts_with("POST "));
    assert!(text.contains("/api_json.html"));
    assert!(text.contains("invalid zone"));
}

#[tokio::test]
async fn error_code_with_http_error_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "result": "success",
            "msg": "Invalid token",
            "err_code": "E_UNAUTH",
            "response": {"ips": []}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .client_api()
        .zone_ips("example.com", 24, Some(IpClass::Crawler))
        .await
        .unwrap_err();

    assert_eq!(err.api_code(), Some("E_UNAUTH"));
    assert_eq!(err.api_message(), Some("Invalid token"));
}

#[tokio::test]
async fn non_json_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.client_api().zone_load_multi().await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, CloudflareError::Decode(_)));
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let client = CloudflareClient::builder(Credentials::new("t0k", "ops@example.com"))
        .base_url(format!("http://{addr}/api_json.html"))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.client_api().zone_settings("example.com").await.unwrap_err();
    assert!(matches!(err, CloudflareError::Transport(_)));
}

#[tokio::test]
async fn custom_reqwest_client_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("x-tenant", "acme"))
        .and(body_string_contains("a=zone_load_multi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "response": {"zones": {"count": 0, "objs": []}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-tenant", reqwest::header::HeaderValue::from_static("acme"));
    let http = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    let client = CloudflareClient::builder(Credentials::new("t0k", "ops@example.com"))
        .base_url(format!("{}/api_json.html", server.uri()))
        .transport(Arc::new(HttpTransport::with_client(http)))
        .build()
        .unwrap();

    let zones = client.client_api().zone_load_multi().await.unwrap();
    assert_eq!(zones.count, 0);
}

#[tokio::test]
async fn timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": "success"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = CloudflareClient::builder(Credentials::new("t0k", "ops@example.com"))
        .base_url(format!("{}/api_json.html", server.uri()))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.client_api().zone_load_multi().await.unwrap_err();
    assert!(matches!(err, CloudflareError::Transport(_)));
}

#[tokio::test]
async fn optional_class_omitted_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("a=zone_ips&z=example.com&hours=48&tkn="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "response": {"ips": [{"ip": "198.51.100.4", "classification": "regular", "hits": 7}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ips = client
        .client_api()
        .zone_ips("example.com", 48, None)
        .await
        .unwrap();
    assert_eq!(ips.len(), 1);
    assert_eq!(ips[0].ip, "198.51.100.4");

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8(requests[0].body.clone()).unwrap();
    assert!(!body.contains("class="));
}

#[tokio::test]
async fn records_nested_under_recs_objs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("a=rec_load_all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "response": {"recs": {"has_more": false, "count": 2, "objs": [
                {"rec_id": "1", "name": "example.com", "type": "A", "content": "203.0.113.1", "ttl": "1"},
                {"rec_id": "2", "name": "example.com", "type": "MX", "content": "mx.example.com", "prio": "10", "ttl": "3600"}
            ]}}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let records = client.client_api().rec_load_all("example.com").await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].prio, 10);
    assert_eq!(records[1].ttl_secs(), Some(3600));
}

#[tokio::test]
async fn host_api_posts_to_host_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/host-gw.html"))
        .and(body_string_contains("act=user_lookup"))
        .and(body_string_contains("host_key=hk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "response": {"user_key": "uk", "user_exists": true}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let value: Value = client
        .host_api()
        .call("user_lookup", FormParams::new().with("cloudflare_email", "owner@example.com"))
        .await
        .unwrap();
    assert_eq!(value["user_exists"], true);
}
