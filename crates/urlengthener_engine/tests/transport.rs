use std::net::TcpListener;

use pretty_assertions::assert_eq;
use urlengthener_engine::{FailureKind, ReqwestTransport, Transport, TransportSettings};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = "/lengthen?url=https%3A%2F%2Fa.example%2Fx%3Fy%3D1&delay=5&duration=60";

#[tokio::test]
async fn transport_returns_body_of_200_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lengthen"))
        .and(query_param("url", "https://a.example/x?y=1"))
        .and(query_param("delay", "5"))
        .and(query_param("duration", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_string("abc123"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(&server.uri(), TransportSettings::default()).unwrap();
    let body = transport.lengthen(QUERY).await.expect("lengthen ok");

    assert_eq!(body, "abc123");
}

#[tokio::test]
async fn transport_sends_query_as_built() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lengthen"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(&server.uri(), TransportSettings::default()).unwrap();
    transport.lengthen(QUERY).await.expect("lengthen ok");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("url=https%3A%2F%2Fa.example%2Fx%3Fy%3D1&delay=5&duration=60")
    );
}

#[tokio::test]
async fn transport_reports_not_found_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lengthen"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(&server.uri(), TransportSettings::default()).unwrap();
    let err = transport.lengthen(QUERY).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn transport_treats_other_2xx_as_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lengthen"))
        .respond_with(ResponseTemplate::new(201).set_body_string("abc"))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(&server.uri(), TransportSettings::default()).unwrap();
    let err = transport.lengthen(QUERY).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(201));
}

#[tokio::test]
async fn transport_reports_network_error_when_unreachable() {
    // Grab a free port, then close it so the connect is refused.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let origin = format!("http://127.0.0.1:{port}");

    let transport = ReqwestTransport::new(&origin, TransportSettings::default()).unwrap();
    let err = transport.lengthen(QUERY).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
}
