//! Tests for the update_test & update_test_without_id endpoints.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use testsystem::{
    model::test::TestDto,
    server::{
        controller::test::{get_test, update_test, update_test_without_id},
        model::session::role::Role,
    },
};

use super::*;

fn input(name: &str, duration_minutes: i32, questions_number: i32) -> TestDto {
    TestDto {
        name: name.to_string(),
        duration_minutes,
        questions_number,
        ..Default::default()
    }
}

/// Expect 200 with only name, duration & question count changed
#[tokio::test]
async fn updates_owned_test() -> Result<(), TestError> {
    let test = TestBuilder::new().with_test_tables().build().await?;
    let existing = test.fixtures().insert_mock_test("u1", "Quiz1").await?;
    login_as(&test.session, "u1", &[Role::Teacher]).await?;

    let body = TestDto {
        author_id: Some("u2".to_string()),
        questions: vec!["q9".to_string()],
        ..input("Quiz1b", 45, 7)
    };
    let result = update_test(
        State(test.to_app_state()),
        test.session.clone(),
        Path(existing.id.clone()),
        Json(body),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: TestDto = body_json(resp).await;
    assert_eq!(updated.id.as_deref(), Some(existing.id.as_str()));
    assert_eq!(updated.author_id.as_deref(), Some("u1"));
    assert_eq!(updated.name, "Quiz1b");
    assert_eq!(updated.duration_minutes, 45);
    assert_eq!(updated.questions_number, 7);
    assert!(updated.questions.is_empty());

    // Persisted change is visible on a subsequent read
    let result = get_test(
        State(test.to_app_state()),
        test.session.clone(),
        Path(existing.id.clone()),
    )
    .await;
    let fetched: TestDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(fetched, updated);

    Ok(())
}

/// Expect 404 and no change when the test belongs to another author
#[tokio::test]
async fn not_found_for_other_authors_test() -> Result<(), TestError> {
    let test = TestBuilder::new().with_test_tables().build().await?;
    let existing = test.fixtures().insert_mock_test("u1", "Quiz1").await?;
    login_as(&test.session, "u2", &[Role::Teacher]).await?;

    let result = update_test(
        State(test.to_app_state()),
        test.session.clone(),
        Path(existing.id.clone()),
        Json(input("Hijacked", 10, 1)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let stored = entity::prelude::Test::find_by_id(existing.id.clone())
        .one(&test.db)
        .await?;
    assert_eq!(stored, Some(existing));

    Ok(())
}

/// Expect 404 when the test does not exist
#[tokio::test]
async fn not_found_for_missing_test() -> Result<(), TestError> {
    let test = TestBuilder::new().with_test_tables().build().await?;
    login_as(&test.session, "u1", &[Role::Teacher]).await?;

    let result = update_test(
        State(test.to_app_state()),
        test.session.clone(),
        Path("missing".to_string()),
        Json(input("Quiz1", 30, 5)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a negative question count
#[tokio::test]
async fn bad_request_for_invalid_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_test_tables().build().await?;
    let existing = test.fixtures().insert_mock_test("u1", "Quiz1").await?;
    login_as(&test.session, "u1", &[Role::Teacher]).await?;

    let result = update_test(
        State(test.to_app_state()),
        test.session.clone(),
        Path(existing.id),
        Json(input("Quiz1", 30, -1)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when updating without a test ID
#[tokio::test]
async fn bad_request_without_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_test_tables().build().await?;
    login_as(&test.session, "u1", &[Role::Teacher]).await?;

    let result = update_test_without_id(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 401 when no user is logged in
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_test_tables().build().await?;
    let existing = test.fixtures().insert_mock_test("u1", "Quiz1").await?;

    let result = update_test(
        State(test.to_app_state()),
        test.session.clone(),
        Path(existing.id),
        Json(input("Quiz1", 30, 5)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
