//! End-to-end tests sending encoded requests to a mock HTTP server.

use request_params::{EncodingMode, HttpRequest, Param, ParameterEncoder, Params};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn json_body_and_query_reach_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(query_param("dry_run", "true"))
        .and(body_json(json!({"name": "Al", "age": "30"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let encoder = ParameterEncoder::new()
        .with_query(Params::new().with("dry_run", true))
        .with_body(
            Params::new()
                .with("name", "Al")
                .with("age", 30)
                .with_opt("nickname", None::<&str>),
        );

    let mut request = HttpRequest::post(format!("{}/users", server.uri())).with_header(
        CONTENT_TYPE,
        HeaderValue::from_static(EncodingMode::Json.content_type()),
    );
    encoder.apply(&mut request);

    let response = Client::new()
        .execute(request.into_reqwest().unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn form_body_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header(CONTENT_TYPE.as_str(), "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=password&scope=read+write&scope=admin"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mode = EncodingMode::FormUrlEncoded;
    let encoder = ParameterEncoder::new()
        .with_body(vec![
            Param::present("grant_type", "password"),
            Param::absent("client_secret"),
            Param::present("scope", "read write"),
            Param::present("scope", "admin"),
        ])
        .with_mode(mode);

    let mut request = HttpRequest::post(format!("{}/token", server.uri()))
        .with_header(CONTENT_TYPE, HeaderValue::from_static(mode.content_type()));
    encoder.apply(&mut request);

    let response = Client::new()
        .execute(request.into_reqwest().unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn reqwest_request_is_adapted_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vms"))
        .and(query_param("state", "running"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/vms?state=running", server.uri())).unwrap();
    let mut request = reqwest::Request::new(Method::GET, url);

    ParameterEncoder::new()
        .with_query(vec![Param::present("limit", 10), Param::absent("offset")])
        .apply(&mut request);

    assert_eq!(request.url().query(), Some("state=running&limit=10"));

    let response = Client::new().execute(request).await.unwrap();
    assert_eq!(response.status(), 200);
}
