use anyhow::Result;
use axum::http::StatusCode;
use marquee_model::{ErrorBody, MediaId, UpdatePopularityResponse};
use marquee_server::routes;
use serde_json::{Value, json};

mod common;
use common::build_test_app;

#[tokio::test]
async fn update_succeeds_and_is_visible_to_discover() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .post(routes::UPDATE_POPULARITY)
        .json(&json!({ "movieId": "1", "popularity": 99.5 }))
        .await;
    response.assert_status_ok();

    let body: UpdatePopularityResponse = response.json();
    assert_eq!(body, UpdatePopularityResponse::success(99.5));

    let items: Vec<Value> = app.server.get("/discover?type=movie").await.json();
    let updated = items
        .iter()
        .find(|item| item["id"] == json!(1))
        .expect("movie 1 is listed");
    assert_eq!(updated["popularity"], json!(99.5));

    let stored = app
        .state
        .catalog()
        .get(&MediaId::from(1))
        .expect("movie 1 exists");
    assert_eq!(stored.popularity, 99.5);
    Ok(())
}

#[tokio::test]
async fn numeric_id_and_string_popularity_are_accepted() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .post(routes::UPDATE_POPULARITY)
        .json(&json!({ "movieId": 1, "popularity": " 42.25 " }))
        .await;
    response.assert_status_ok();

    let body: UpdatePopularityResponse = response.json();
    assert_eq!(body.new_popularity, 42.25);
    assert_eq!(body.message, UpdatePopularityResponse::SUCCESS_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn unknown_id_is_rejected() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .post(routes::UPDATE_POPULARITY)
        .json(&json!({ "movieId": "9999", "popularity": 10.0 }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.error, "Movie Id value not provided or not found");
    Ok(())
}

#[tokio::test]
async fn missing_id_is_rejected() -> Result<()> {
    let app = build_test_app()?;

    for payload in [
        json!({ "popularity": 10.0 }),
        json!({ "movieId": null, "popularity": 10.0 }),
        json!({ "movieId": [1], "popularity": 10.0 }),
    ] {
        let response = app
            .server
            .post(routes::UPDATE_POPULARITY)
            .json(&payload)
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Movie Id value not provided or not found");
    }
    Ok(())
}

#[tokio::test]
async fn non_numeric_popularity_is_rejected_without_mutation() -> Result<()> {
    let app = build_test_app()?;
    let before = app
        .state
        .catalog()
        .get(&MediaId::from(1))
        .expect("movie 1 exists")
        .popularity;

    for popularity in [json!("invalid_value"), json!(true), json!(null), json!("NaN")] {
        let response = app
            .server
            .post(routes::UPDATE_POPULARITY)
            .json(&json!({ "movieId": "1", "popularity": popularity }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorBody = response.json();
        assert_eq!(body.error, "Popularity value must be a float");
    }

    let after = app
        .state
        .catalog()
        .get(&MediaId::from(1))
        .expect("movie 1 exists")
        .popularity;
    assert_eq!(before, after);
    Ok(())
}

#[tokio::test]
async fn unknown_id_wins_over_bad_value() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .post(routes::UPDATE_POPULARITY)
        .json(&json!({ "movieId": "9999", "popularity": "invalid_value" }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: ErrorBody = response.json();
    assert_eq!(body.error, "Movie Id value not provided or not found");
    Ok(())
}

#[tokio::test]
async fn non_json_body_is_a_client_error() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .post(routes::UPDATE_POPULARITY)
        .text("movieId=1&popularity=2")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert!(!body.error.is_empty());

    let response = app
        .server
        .post(routes::UPDATE_POPULARITY)
        .content_type("application/json")
        .bytes("{ not json".into())
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn out_of_range_popularity_is_an_invalid_value() -> Result<()> {
    let app = build_test_app()?;

    let response = app
        .server
        .post(routes::UPDATE_POPULARITY)
        .content_type("application/json")
        .bytes(r#"{"movieId": "1", "popularity": 1e400}"#.into())
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.error, "Popularity value must be a float");

    let response = app
        .server
        .post(routes::UPDATE_POPULARITY)
        .content_type("application/json")
        .bytes(r#"{"movieId": "9999", "popularity": 1e400}"#.into())
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorBody = response.json();
    assert_eq!(body.error, "Movie Id value not provided or not found");
    Ok(())
}
