use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::auth::StaticToken;

fn config_for(server: &MockServer) -> TwitchConfig {
    let mut config = TwitchConfig::new(
        "client_credentials",
        "test-client",
        "test-secret",
        format!("{}/oauth2/token", server.uri()),
    );
    config.api_base_url = format!("{}/helix", server.uri());
    config
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"access_token":"app-token","expires_in":5000,"token_type":"bearer"}"#,
        ))
        .mount(server)
        .await;
}

fn static_client(server: &MockServer) -> TwitchApiClient<StaticToken> {
    TwitchApiClient::with_token_source(
        reqwest::Client::new(),
        &config_for(server),
        StaticToken("static-token".into()),
    )
    .unwrap()
}

#[tokio::test]
async fn requests_carry_bearer_and_client_id() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/helix/users"))
        .and(header("Authorization", "Bearer app-token"))
        .and(header("Client-Id", "test-client"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = TwitchApiClient::new(&config_for(&server)).unwrap();
    client.get_broadcaster_id_by_name("anyone").await.unwrap();
}

#[tokio::test]
async fn each_operation_acquires_its_own_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"access_token":"app-token","expires_in":5000,"token_type":"bearer"}"#,
        ))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/helix/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .mount(&server)
        .await;

    let client = TwitchApiClient::new(&config_for(&server)).unwrap();
    client.get_broadcaster_id_by_name("a").await.unwrap();
    client.get_broadcaster_id_by_name("b").await.unwrap();
}

#[tokio::test]
async fn resolve_broadcaster_returns_first_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/helix/users"))
        .and(query_param("login", "killthatrobot"))
        .and(header("Authorization", "Bearer static-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":[{"id":"123","login":"killthatrobot","display_name":"KillThatRobot"}]}"#,
        ))
        .mount(&server)
        .await;

    let id = static_client(&server)
        .get_broadcaster_id_by_name("killthatrobot")
        .await
        .unwrap();
    assert_eq!(id.as_deref(), Some("123"));
}

#[tokio::test]
async fn resolve_broadcaster_with_no_match_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/helix/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .mount(&server)
        .await;

    let id = static_client(&server)
        .get_broadcaster_id_by_name("nobody_here")
        .await
        .unwrap();
    assert!(id.is_none());
}

#[tokio::test]
async fn failed_lookup_names_the_operation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/helix/users"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"Unauthorized"}"#))
        .mount(&server)
        .await;

    let err = static_client(&server)
        .get_broadcaster_id_by_name("killthatrobot")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error fetching broadcaster info: Unauthorized");
}

#[tokio::test]
async fn token_failure_stops_the_data_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = TwitchApiClient::new(&config_for(&server)).unwrap();
    let err = client.get_schedule("123").await.unwrap_err();
    assert_eq!(err.to_string(), "Error fetching access token: Forbidden");
}

#[tokio::test]
async fn schedule_is_fetched_by_broadcaster_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/helix/schedule"))
        .and(query_param("broadcaster_id", "123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
              "data": {
                "segments": [{
                  "id": "seg-1",
                  "start_time": "2026-10-20T18:00:00Z",
                  "end_time": "2026-10-20T21:00:00Z",
                  "title": "Robot night",
                  "canceled_until": null,
                  "category": { "id": "456", "name": "Just Chatting" },
                  "is_recurring": true
                }],
                "broadcaster_id": "123",
                "broadcaster_name": "KillThatRobot",
                "broadcaster_login": "killthatrobot",
                "vacation": {
                  "start_time": "2026-12-24T00:00:00Z",
                  "end_time": "2026-12-31T00:00:00Z"
                }
              },
              "pagination": { "cursor": "next-page" }
            }"#,
        ))
        .mount(&server)
        .await;

    let resp = static_client(&server).get_schedule("123").await.unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data.broadcaster_id, "123");
    assert_eq!(data.segments[0].category.as_ref().unwrap().id, "456");
    assert!(data.vacation.is_some());
    assert_eq!(resp.pagination.unwrap().cursor.as_deref(), Some("next-page"));
}

#[tokio::test]
async fn schedule_not_found_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/helix/schedule"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"error":"Not Found","status":404,"message":"segments were either not found or have been deleted"}"#,
        ))
        .mount(&server)
        .await;

    let err = static_client(&server).get_schedule("123").await.unwrap_err();
    assert_eq!(err.to_string(), "Error fetching schedule: Not Found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn categories_are_sized_and_requested_by_repeated_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/helix/games"))
        .and(query_param("id", "456"))
        .and(query_param("id", "789"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":[
              {"id":"456","name":"Just Chatting","box_art_url":"https://x/{width}-{height}.jpg","igdb_id":""},
              {"id":"789","name":"Other","box_art_url":"https://x/static.jpg"}
            ]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let ids = vec!["456".to_string(), "789".to_string()];
    let categories = static_client(&server)
        .get_categories(&ids, 432, 650)
        .await
        .unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].box_art_url, "https://x/432-650.jpg");
    assert_eq!(categories[1].box_art_url, "https://x/static.jpg");

    let requests = server.received_requests().await.unwrap();
    let sent_ids: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(sent_ids, ["456", "789"]);
}

#[tokio::test]
async fn empty_category_list_skips_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let categories = static_client(&server)
        .get_categories(&[], 432, 650)
        .await
        .unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn failed_category_fetch_names_the_operation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/helix/games"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = static_client(&server)
        .get_categories(&["456".to_string()], 432, 650)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error fetching games: Internal Server Error");
}

#[tokio::test]
async fn slow_helix_response_times_out() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/helix/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"data":[]}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout = Duration::from_millis(200);
    let client = TwitchApiClient::new(&config).unwrap();

    let err = client
        .get_broadcaster_id_by_name("killthatrobot")
        .await
        .unwrap_err();
    assert!(matches!(&err, TwitchError::Http(e) if e.is_timeout()), "{err:?}");
}

#[tokio::test]
async fn slow_token_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"access_token":"app-token","expires_in":5000,"token_type":"bearer"}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout = Duration::from_millis(200);
    let client = TwitchApiClient::new(&config).unwrap();

    let err = client.get_schedule("123").await.unwrap_err();
    assert!(matches!(&err, TwitchError::Http(e) if e.is_timeout()), "{err:?}");
}

#[test]
fn invalid_base_url_is_rejected() {
    let mut config = TwitchConfig::new("client_credentials", "id", "secret", "http://t");
    config.api_base_url = "::not a url::".into();
    let result = TwitchApiClient::with_token_source(
        reqwest::Client::new(),
        &config,
        StaticToken("t".into()),
    );
    assert!(matches!(result, Err(TwitchError::UrlParse(_))));
}
