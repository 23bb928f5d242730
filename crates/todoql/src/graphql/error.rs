use async_graphql::{Error, ErrorExtensions};
use todoql_core::resolvers::ResolverError;

/// Converts a resolver error into a GraphQL error.
///
/// The message is the error text; extensions carry `name` and, when the
/// store reported one, `statusCode`.
pub fn to_graphql_error(error: ResolverError) -> Error {
    Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("name", error.name().to_string());
        if let Some(status_code) = error.status_code() {
            extensions.set("statusCode", status_code);
        }
    })
}
