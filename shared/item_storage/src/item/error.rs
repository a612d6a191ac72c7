//! Error types for item storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{get_item::GetItemError, put_item::PutItemError};
use thiserror::Error;

/// Result type for item storage operations
pub type ItemStorageResult<T> = Result<T, ItemStorageError>;

/// Errors that can occur during item storage operations
#[derive(Error, Debug)]
pub enum ItemStorageError {
    /// Failed to write an item to DynamoDB
    #[error("Failed to put item into DynamoDB: {0}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to read an item from DynamoDB
    #[error("Failed to get item from DynamoDB: {0}")]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Serialization error for `serde_dynamo`
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
