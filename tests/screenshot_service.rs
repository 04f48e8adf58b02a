//! Request helper against a mock screenshot service

use std::io::Read;
use std::sync::{Mutex, Once};

use tiny_http::{Header, Response, Server};
use websnap::{CaptureOptions, ClientConfig, ScreenshotClient, ScreenshotResponse, Viewport};

static INIT: Once = Once::new();
static BODIES: Mutex<Vec<String>> = Mutex::new(Vec::new());

const BASE: &str = "http://127.0.0.1:18190";

fn json_header() -> Header {
    "Content-Type: application/json".parse::<Header>().unwrap()
}

/// Start a mock screenshot service whose behavior depends on the path
fn start_mock_service() -> &'static str {
    INIT.call_once(|| {
        std::thread::spawn(|| {
            let server = Server::http("127.0.0.1:18190").unwrap();
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                BODIES.lock().unwrap().push(body);

                let response = match request.url() {
                    "/ok" => Response::from_string(r#"{"success":true,"screenshot":"QQ=="}"#)
                        .with_header(json_header()),
                    "/fail" => Response::from_string(r#"{"success":false,"error":"boom"}"#)
                        .with_header(json_header()),
                    "/error500" => {
                        Response::from_string(r#"{"success":false,"error":"internal error"}"#)
                            .with_status_code(500)
                            .with_header(json_header())
                    }
                    "/garbage" => Response::from_string("<html>not json</html>")
                        .with_header("Content-Type: text/html".parse::<Header>().unwrap()),
                    _ => Response::from_string("Not Found").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });
        // Give the server time to start
        std::thread::sleep(std::time::Duration::from_millis(100));
    });

    BASE
}

fn client_for(path: &str) -> ScreenshotClient {
    let base = start_mock_service();
    let config = ClientConfig {
        endpoint: format!("{}{}", base, path),
        timeout_ms: Some(5_000),
        ..Default::default()
    };
    ScreenshotClient::new(config).expect("client")
}

#[tokio::test]
async fn success_response_is_returned_unchanged() {
    let client = client_for("/ok");
    let resp = client
        .fetch_screenshot("https://ok.example", &CaptureOptions::default())
        .await;

    assert_eq!(
        resp,
        Some(ScreenshotResponse {
            success: true,
            screenshot: Some("QQ==".to_string()),
            error: None,
            url: None,
            size: None,
        })
    );
}

#[tokio::test]
async fn request_body_matches_wire_format() {
    let client = client_for("/ok");
    let options = CaptureOptions {
        wait_time: 3,
        full_page: true,
        viewport: Viewport { width: 1280, height: 720 },
    };
    client.fetch_screenshot("https://body.example", &options).await;

    let bodies = BODIES.lock().unwrap();
    let body = bodies
        .iter()
        .filter_map(|b| serde_json::from_str::<serde_json::Value>(b).ok())
        .find(|v| v["url"] == "https://body.example")
        .expect("request body recorded");

    assert_eq!(
        body,
        serde_json::json!({
            "url": "https://body.example",
            "wait_time": 3,
            "full_page": true,
            "viewport_width": 1280,
            "viewport_height": 720,
            "format": "base64",
        })
    );
}

#[tokio::test]
async fn reported_failure_yields_none() {
    let client = client_for("/fail");
    let resp = client
        .fetch_screenshot("https://fail.example", &CaptureOptions::default())
        .await;
    assert!(resp.is_none());
}

#[tokio::test]
async fn http_500_with_json_error_yields_none() {
    let client = client_for("/error500");
    let opts = CaptureOptions::default();
    assert!(client.fetch_screenshot("https://500.example", &opts).await.is_none());

    let err = client
        .try_fetch_screenshot("https://500.example", &opts)
        .await
        .unwrap_err();
    assert!(matches!(err, websnap::Error::Service(ref m) if m == "internal error"));
}

#[tokio::test]
async fn malformed_body_yields_none() {
    let client = client_for("/garbage");
    let opts = CaptureOptions::default();
    assert!(client.fetch_screenshot("https://garbage.example", &opts).await.is_none());
    assert!(matches!(
        client.try_fetch_screenshot("https://garbage.example", &opts).await,
        Err(websnap::Error::Protocol(_))
    ));
}

#[tokio::test]
async fn network_failure_yields_none() {
    // Nothing listens on port 1
    let config = ClientConfig {
        endpoint: "http://127.0.0.1:1/screenshot".to_string(),
        timeout_ms: Some(2_000),
        ..Default::default()
    };
    let client = ScreenshotClient::new(config).expect("client");
    let opts = CaptureOptions::default();

    assert!(client.fetch_screenshot("https://down.example", &opts).await.is_none());
    assert!(matches!(
        client.try_fetch_screenshot("https://down.example", &opts).await,
        Err(websnap::Error::Network(_))
    ));
}
