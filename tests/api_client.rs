//
//  community-sdk
//  tests/api_client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client behaviour against a mock Community server.

use chrono::{TimeZone, Utc};
use community_sdk::api::client::RESPONSE_GUARD;
use community_sdk::api::endpoints::{ActivityQuery, ContentQuery, NewContent, PeopleQuery};
use community_sdk::api::{ApiError, CommunityClient};
use community_sdk::auth::Credential;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const API_PATH: &str = "/api/core/v3";

fn client_for(server: &ServerGuard) -> CommunityClient {
    CommunityClient::with_credential(
        &format!("{}{}", server.url(), API_PATH),
        Credential::new("jdoe", "s3cret"),
    )
    .unwrap()
}

fn guarded(body: serde_json::Value) -> String {
    format!("{}\n{}", RESPONSE_GUARD, body)
}

fn person(id: &str) -> serde_json::Value {
    json!({"id": id, "displayName": format!("Person {id}")})
}

#[tokio::test]
async fn test_list_follows_next_links_until_exhausted() {
    let mut server = Server::new_async().await;
    let base = format!("{}{}/people", server.url(), API_PATH);

    let first = server
        .mock("GET", "/api/core/v3/people")
        .match_query(Matcher::Regex("^count=2$".into()))
        .with_status(200)
        .with_body(guarded(json!({
            "itemsPerPage": 2,
            "startIndex": 0,
            "list": [person("1"), person("2")],
            "links": {"next": format!("{base}?count=2&startIndex=2")}
        })))
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/core/v3/people")
        .match_query(Matcher::Regex("startIndex=2$".into()))
        .with_status(200)
        .with_body(guarded(json!({
            "list": [person("3"), person("4")],
            "links": {
                "previous": format!("{base}?count=2&startIndex=0"),
                "next": format!("{base}?count=2&startIndex=4")
            }
        })))
        .create_async()
        .await;
    let third = server
        .mock("GET", "/api/core/v3/people")
        .match_query(Matcher::Regex("startIndex=4$".into()))
        .with_status(200)
        .with_body(guarded(json!({"list": [person("5")]})))
        .create_async()
        .await;

    let client = client_for(&server);
    let query = PeopleQuery {
        count: Some(2),
        ..Default::default()
    };
    let people = client.list_people(&query).await.unwrap();

    let ids: Vec<&str> = people.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
}

#[tokio::test]
async fn test_failed_page_discards_earlier_records() {
    let mut server = Server::new_async().await;
    let next = format!("{}{}/people?count=1&startIndex=1", server.url(), API_PATH);

    server
        .mock("GET", "/api/core/v3/people")
        .match_query(Matcher::Regex("^count=1$".into()))
        .with_status(200)
        .with_body(guarded(json!({"list": [person("1")], "links": {"next": next}})))
        .create_async()
        .await;
    server
        .mock("GET", "/api/core/v3/people")
        .match_query(Matcher::UrlEncoded("startIndex".into(), "1".into()))
        .with_status(500)
        .with_body(r#"{"error": {"status": 500, "message": "Database unavailable"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let query = PeopleQuery {
        count: Some(1),
        ..Default::default()
    };
    let error = client.list_people(&query).await.unwrap_err();

    match error {
        ApiError::Status {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_count_is_clamped_on_the_wire() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/core/v3/people")
        .match_query(Matcher::UrlEncoded("count".into(), "100".into()))
        .with_status(200)
        .with_body(guarded(json!({"list": []})))
        .create_async()
        .await;

    let client = client_for(&server);
    let query = PeopleQuery {
        count: Some(250),
        ..Default::default()
    };
    let people = client.list_people(&query).await.unwrap();

    assert!(people.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_basic_auth_header_is_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/core/v3/people/@me")
        .match_header("authorization", "Basic amRvZTpzM2NyZXQ=")
        .with_status(200)
        .with_body(guarded(person("2001")))
        .create_async()
        .await;

    let client = client_for(&server);
    let me = client.get_me().await.unwrap();

    assert_eq!(me.id, "2001");
    assert_eq!(me.display_name, "Person 2001");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_documented_status_is_translated() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/core/v3/people/42")
        .with_status(404)
        .with_body(r#"{"error": {"status": 404, "message": "No person with ID 42"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.get_person("42").await.unwrap_err();

    assert_eq!(error.to_string(), "person not found");
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn test_undocumented_status_keeps_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/core/v3/people/42")
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.get_person("42").await.unwrap_err();

    assert!(matches!(error, ApiError::Status { status: 503, .. }));
    assert!(error.to_string().contains("Service Unavailable"));
}

#[tokio::test]
async fn test_activity_timestamps_are_sent_with_encoded_offset() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/core/v3/activities")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("after".into(), "2024-03-01T09:30:00.000+0000".into()),
            Matcher::UrlEncoded("count".into(), "1000".into()),
        ]))
        .with_status(200)
        .with_body(guarded(json!({
            "list": [{
                "id": "a1",
                "verb": "jive:created",
                "title": "Created <b>Hello</b>",
                "published": "2024-03-01T10:00:00.000+0000"
            }]
        })))
        .create_async()
        .await;

    let client = client_for(&server);
    let query = ActivityQuery {
        after: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()),
        count: Some(5000),
        ..Default::default()
    };
    let activities = client.list_activities(&query).await.unwrap();

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].verb, "jive:created");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_content_posts_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/core/v3/contents")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "type": "discussion",
            "subject": "Hello",
            "content": {"type": "text/html", "text": "<p>Hi</p>"}
        })))
        .with_status(201)
        .with_body(guarded(json!({
            "id": "1001",
            "type": "discussion",
            "subject": "Hello"
        })))
        .create_async()
        .await;

    let client = client_for(&server);
    let created = client
        .create_content(&NewContent::new("discussion", "Hello", "<p>Hi</p>"))
        .await
        .unwrap();

    assert_eq!(created.id, "1001");
    assert_eq!(created.subject, "Hello");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_content_conflict() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/core/v3/contents")
        .with_status(409)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client
        .create_content(&NewContent::new("discussion", "Hello", "<p>Hi</p>"))
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "conflicts with business rules");
    assert_eq!(error.status(), Some(409));
}

#[tokio::test]
async fn test_delete_content() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("DELETE", "/api/core/v3/contents/1001")
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("DELETE", "/api/core/v3/contents/1002")
        .with_status(403)
        .create_async()
        .await;

    let client = client_for(&server);
    client.delete_content("1001").await.unwrap();
    ok.assert_async().await;

    let error = client.delete_content("1002").await.unwrap_err();
    assert_eq!(error.to_string(), "not allowed to perform this operation");
}

#[tokio::test]
async fn test_place_contents_gone() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/core/v3/places/3001/contents")
        .match_query(Matcher::Any)
        .with_status(410)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client
        .get_place_contents("3001", &ContentQuery::default())
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "place no longer exists");
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/core/v3/people/@me")
        .with_status(200)
        .with_body(format!("{}<html>maintenance</html>", RESPONSE_GUARD))
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.get_me().await.unwrap_err();

    assert!(matches!(error, ApiError::Parse { .. }));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = CommunityClient::with_credential(
        &format!("http://127.0.0.1:{port}{API_PATH}"),
        Credential::new("jdoe", "s3cret"),
    )
    .unwrap();
    let error = client.list_people(&PeopleQuery::default()).await.unwrap_err();

    assert!(matches!(error, ApiError::Transport(_)), "{error:?}");
    assert_eq!(error.status(), None);
}

#[tokio::test]
async fn test_following_forbidden_has_its_own_wording() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/core/v3/people/2001/@following")
        .with_status(403)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.get_following("2001", None).await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "not allowed to access people followed by this person"
    );
    assert_eq!(error.status(), Some(403));
}
