//! Tests for the get_tests endpoint.
//!
//! Verifies that only the logged in author's tests are listed and that callers without
//! an authenticated session or without the admin/teacher role are rejected.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use testsystem::{
    model::test::TestDto,
    server::{controller::test::get_tests, model::session::role::Role},
};

use super::*;

/// Expect 200 with only the caller's tests
#[tokio::test]
async fn lists_only_callers_tests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_test("u1", "Quiz1")
        .with_mock_test("u1", "Quiz2")
        .with_mock_test("u2", "Quiz3")
        .build()
        .await?;
    login_as(&test.session, "u1", &[Role::Teacher]).await?;

    let result = get_tests(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let tests: Vec<TestDto> = body_json(resp).await;
    assert_eq!(tests.len(), 2);
    assert!(tests.iter().all(|t| t.author_id.as_deref() == Some("u1")));

    Ok(())
}

/// Expect 200 with an empty list for an author without tests
#[tokio::test]
async fn empty_for_author_without_tests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_test("u1", "Quiz1")
        .build()
        .await?;
    login_as(&test.session, "u2", &[Role::Admin]).await?;

    let result = get_tests(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let tests: Vec<TestDto> = body_json(resp).await;
    assert!(tests.is_empty());

    Ok(())
}

/// Expect 401 when no user is logged in
#[tokio::test]
async fn unauthorized_when_not_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_test_tables().build().await?;

    let result = get_tests(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 for a user holding only the student role
#[tokio::test]
async fn forbidden_for_student() -> Result<(), TestError> {
    let test = TestBuilder::new().with_test_tables().build().await?;
    login_as(&test.session, "u1", &[Role::Student]).await?;

    let result = get_tests(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 500 when required database tables don't exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    login_as(&test.session, "u1", &[Role::Teacher]).await?;

    let result = get_tests(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
