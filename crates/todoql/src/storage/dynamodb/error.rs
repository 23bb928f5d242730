//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `todoql_core::storage`, keeping
//! the service error code and the HTTP status of the raw response.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use todoql_core::storage::StoreError;

const CONDITIONAL_CHECK_MESSAGE: &str = "The conditional request failed";
const CONDITIONAL_CHECK_STATUS: u16 = 400;
const UNKNOWN_ERROR: &str = "UnknownError";

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error(err: SdkError<PutItemError, HttpResponse>) -> StoreError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    let status_code = status_code(&err);
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(e) => {
            conditional_check_failed(e.message(), status_code)
        }
        err => service_error(&err, status_code),
    }
}

/// Map an UpdateItem SDK error to StoreError.
pub fn map_update_item_error(err: SdkError<UpdateItemError, HttpResponse>) -> StoreError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    let status_code = status_code(&err);
    match err.into_service_error() {
        UpdateItemError::ConditionalCheckFailedException(e) => {
            conditional_check_failed(e.message(), status_code)
        }
        err => service_error(&err, status_code),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error(err: SdkError<DeleteItemError, HttpResponse>) -> StoreError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    let status_code = status_code(&err);
    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(e) => {
            conditional_check_failed(e.message(), status_code)
        }
        err => service_error(&err, status_code),
    }
}

/// Map a Query SDK error to StoreError.
pub fn map_query_error(err: SdkError<QueryError, HttpResponse>) -> StoreError {
    if let Some(error) = connection_error(&err) {
        return error;
    }
    let status_code = status_code(&err);
    service_error(&err.into_service_error(), status_code)
}

/// Requests that never produced a service response.
fn connection_error<E, R>(err: &SdkError<E, R>) -> Option<StoreError>
where
    E: Error + 'static,
    R: Debug,
{
    match err {
        SdkError::ConstructionFailure(_)
        | SdkError::DispatchFailure(_)
        | SdkError::TimeoutError(_) => Some(StoreError::ConnectionFailed(
            DisplayErrorContext(err).to_string(),
        )),
        _ => None,
    }
}

fn status_code<E>(err: &SdkError<E, HttpResponse>) -> Option<u16> {
    err.raw_response()
        .map(|response| response.status().as_u16())
}

fn conditional_check_failed(message: Option<&str>, status_code: Option<u16>) -> StoreError {
    StoreError::ConditionalCheckFailed {
        message: message.unwrap_or(CONDITIONAL_CHECK_MESSAGE).to_string(),
        status_code: status_code.or(Some(CONDITIONAL_CHECK_STATUS)),
    }
}

fn service_error<E>(err: &E, status_code: Option<u16>) -> StoreError
where
    E: ProvideErrorMetadata + Error,
{
    StoreError::Service {
        name: err.code().unwrap_or(UNKNOWN_ERROR).to_string(),
        message: err
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string()),
        status_code,
    }
}
