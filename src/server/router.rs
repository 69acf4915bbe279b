//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/tests` - List tests created by the current user
/// - `POST /api/tests` - Create a test owned by the current user
/// - `PUT /api/tests` - Rejected update without a test ID
/// - `GET /api/tests/{test_id}` - Get a test created by the current user
/// - `PUT /api/tests/{test_id}` - Update a test created by the current user
/// - `DELETE /api/tests/{test_id}` - Delete a test created by the current user
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, the session layer is applied by the caller.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Test System", description = "Test system API"), tags(
        (name = controller::test::TEST_TAG, description = "Test management API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::test::get_tests,
            controller::test::create_test,
            controller::test::update_test_without_id
        ))
        .routes(routes!(
            controller::test::get_test,
            controller::test::update_test,
            controller::test::delete_test
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
