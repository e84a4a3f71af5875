// ABOUTME: Integration tests for the portal client against a mocked portal.
// ABOUTME: Covers term orchestration, evaluation-fetch skipping, and error mapping.

use fundboard_client::Client;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;

/// Minimal listing page with two events: 7 has a post-evaluation link,
/// 8 does not.
fn listing_page() -> String {
    r#"<!DOCTYPE html>
<html><body>
<table id="results">
  <thead><tr><th>Id</th><th>Org</th><th>Event</th><th>Date</th><th>Venue</th><th>Awarded</th><th>Updated</th><th></th></tr></thead>
  <tbody>
    <tr><td>7*</td><td>Chess Club</td><td>Open Night</td><td>20240301</td>
        <td>Hall 101</td><td>$150.00</td><td>20240305</td>
        <td><a class="btn btn-info" href="/Home/ViewPostEvaluation/7">Info</a></td></tr>
    <tr><td>8</td><td>Film Society</td><td>Screening</td><td>20240402</td>
        <td>Room 5</td><td></td><td>20240403</td><td></td></tr>
  </tbody>
</table>
</body></html>"#
        .to_string()
}

fn application_page(org: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><body>
<dl><dt>Organization</dt><dd>{org}</dd></dl>
<table><tbody>
  <tr><td>Food</td><td>Snacks</td><td>$50.00</td><td>$40.00</td><td></td><td></td></tr>
</tbody></table>
</body></html>"#
    )
}

fn evaluation_page() -> String {
    "<!DOCTYPE html>\n<html><body>\n  <div class=\"form-group\">\n    <label>Actual attendance</label>\n    55\n  </div>\n</body></html>"
        .to_string()
}

fn client_for(server: &MockServer) -> Client {
    Client::builder().base_url(server.base_url()).build()
}

#[tokio::test]
async fn test_scrape_term_composes_records() {
    let server = MockServer::start_async().await;

    let listing = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/Home/Events")
                .query_param("term", "2024-spring");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(listing_page());
        })
        .await;
    let app7 = server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/ViewApplication/7");
            then.status(200).body(application_page("Chess Club"));
        })
        .await;
    let app8 = server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/ViewApplication/8");
            then.status(200).body(application_page("Film Society"));
        })
        .await;
    let eval7 = server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/ViewPostEvaluation/7");
            then.status(200).body(evaluation_page());
        })
        .await;

    let records = client_for(&server)
        .scrape_term("2024-spring", None)
        .await
        .unwrap();

    listing.assert_async().await;
    app7.assert_async().await;
    app8.assert_async().await;
    eval7.assert_async().await;

    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.event.id, 7);
    assert_eq!(first.application.questions["Organization"], "Chess Club");
    let evaluation = first.post_evaluation.as_ref().unwrap();
    assert_eq!(evaluation.questions["Actual attendance"], "55");

    let second = &records[1];
    assert_eq!(second.event.id, 8);
    assert_eq!(second.event.awarded, None);
    assert!(second.post_evaluation.is_none());
}

/// An event without the action link never triggers an evaluation fetch.
#[tokio::test]
async fn test_evaluation_not_fetched_without_link() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/Events");
            then.status(200).body(listing_page());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_includes("/Home/ViewApplication/");
            then.status(200).body(application_page("Org"));
        })
        .await;
    let eval8 = server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/ViewPostEvaluation/8");
            then.status(200).body(evaluation_page());
        })
        .await;
    let eval7 = server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/ViewPostEvaluation/7");
            then.status(200).body(evaluation_page());
        })
        .await;

    client_for(&server)
        .scrape_term("2024-spring", None)
        .await
        .unwrap();

    assert_eq!(eval7.hits_async().await, 1);
    assert_eq!(eval8.hits_async().await, 0);
}

#[tokio::test]
async fn test_limit_caps_events_followed() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/Events");
            then.status(200).body(listing_page());
        })
        .await;
    let app7 = server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/ViewApplication/7");
            then.status(200).body(application_page("Chess Club"));
        })
        .await;
    let app8 = server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/ViewApplication/8");
            then.status(200).body(application_page("Film Society"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/ViewPostEvaluation/7");
            then.status(200).body(evaluation_page());
        })
        .await;

    let records = client_for(&server)
        .scrape_term("2024-spring", Some(1))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(app7.hits_async().await, 1);
    assert_eq!(app8.hits_async().await, 0);
}

#[tokio::test]
async fn test_non_success_status_is_a_status_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/Events");
            then.status(500).body("portal down");
        })
        .await;

    let err = client_for(&server)
        .scrape_term("2024-spring", None)
        .await
        .unwrap_err();
    assert!(err.is_status());
}

/// A page that is not the listing layout surfaces as an Extract error, not
/// a panic or empty result.
#[tokio::test]
async fn test_wrong_page_layout_is_an_extract_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/Home/Events");
            then.status(200).body("<html><body><p>login required</p></body></html>");
        })
        .await;

    let err = client_for(&server).events("2024-spring").await.unwrap_err();
    assert!(err.is_extract());
}
