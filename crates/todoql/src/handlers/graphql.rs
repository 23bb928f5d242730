//! GraphQL endpoint.
//!
//! - `POST /graphql` - Execute a GraphQL request
//! - `GET /graphql` - GraphiQL explorer, only when introspection is enabled

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

/// POST /graphql - Execute a query or mutation.
#[axum::debug_handler]
pub async fn graphql(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

/// GET /graphql - Serve GraphiQL.
#[axum::debug_handler]
pub async fn graphiql(State(state): State<AppState>) -> Response {
    if !state.introspection {
        return StatusCode::NOT_FOUND.into_response();
    }

    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}
