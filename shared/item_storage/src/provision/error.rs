//! Error types for table provisioning

use std::time::Duration;

use aws_sdk_dynamodb::error::{BuildError, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use thiserror::Error;

/// Result type for provisioning operations
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors that can occur while ensuring the backing table exists and is ready
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Failed to build the table schema from the descriptor
    #[error("Invalid table descriptor: {0}")]
    InvalidDescriptor(#[from] BuildError),

    /// Failed to create the table in DynamoDB
    #[error("Failed to create table in DynamoDB: {0}")]
    CreateError(#[from] SdkError<CreateTableError>),

    /// Failed to describe the table while waiting for it to become active
    #[error("Failed to describe table in DynamoDB: {0}")]
    DescribeError(#[from] SdkError<DescribeTableError>),

    /// The table did not become active within the configured wait
    #[error("Table `{table_name}` did not become active within {timeout:?}")]
    ReadyTimeout {
        /// Name of the table that was being provisioned
        table_name: String,
        /// How long the provisioner waited before giving up
        timeout: Duration,
    },
}
