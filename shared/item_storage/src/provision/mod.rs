//! Startup provisioning for the items table
//!
//! Ensures the backing table exists with the expected key schema and blocks
//! until DynamoDB reports it active. Runs exactly once at process startup,
//! before the service accepts traffic, on a handle that is released before
//! serving begins.

mod error;

use std::time::Duration;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
    TableStatus,
};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use tokio::time::{sleep, Instant};

pub use error::{ProvisionError, ProvisionResult};

use crate::item::ItemAttribute;

/// How often the provisioner re-checks table status while waiting.
const READY_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default bound on the wait for the table to become active.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(30);

/// Schema definition for the backing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    /// Table name
    pub table_name: String,
    /// Single HASH key attribute, string typed
    pub partition_key: String,
    /// Provisioned read capacity units
    pub read_capacity: i64,
    /// Provisioned write capacity units
    pub write_capacity: i64,
}

impl TableDescriptor {
    /// Descriptor for the items table: single string partition key `id`,
    /// minimal provisioned throughput.
    #[must_use]
    pub fn items(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            partition_key: ItemAttribute::Id.to_string(),
            read_capacity: 1,
            write_capacity: 1,
        }
    }
}

/// Ensures the table described by `descriptor` exists and is active.
///
/// Creation is idempotent: a table that already exists is logged and treated
/// as success. Only that error class is recovered locally; any other creation
/// failure propagates to the caller and should abort startup. After the
/// create attempt, polls table status until DynamoDB reports `ACTIVE`,
/// bounded by `ready_timeout`.
///
/// # Errors
///
/// Returns `ProvisionError` if table creation fails for a reason other than
/// the table already existing, if a status check fails, or if the table does
/// not become active within `ready_timeout`.
pub async fn ensure_table(
    client: &DynamoDbClient,
    descriptor: &TableDescriptor,
    ready_timeout: Duration,
) -> ProvisionResult<()> {
    let create_result = client
        .create_table()
        .table_name(&descriptor.table_name)
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(&descriptor.partition_key)
                .attribute_type(ScalarAttributeType::S)
                .build()?,
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(&descriptor.partition_key)
                .key_type(KeyType::Hash)
                .build()?,
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(descriptor.read_capacity)
                .write_capacity_units(descriptor.write_capacity)
                .build()?,
        )
        .send()
        .await;

    match create_result {
        Ok(_) => {
            tracing::info!(table_name = %descriptor.table_name, "Created table");
        }
        Err(SdkError::ServiceError(ref svc)) if svc.err().is_resource_in_use_exception() => {
            tracing::info!(
                table_name = %descriptor.table_name,
                "Table already exists, reusing it"
            );
        }
        Err(err) => return Err(err.into()),
    }

    wait_until_active(client, &descriptor.table_name, ready_timeout).await
}

/// Polls table status until DynamoDB reports `ACTIVE` or the deadline passes.
///
/// A `ResourceNotFoundException` during the poll keeps polling: table
/// creation is eventually consistent and the table may not be visible
/// immediately after the create call returns.
async fn wait_until_active(
    client: &DynamoDbClient,
    table_name: &str,
    ready_timeout: Duration,
) -> ProvisionResult<()> {
    let deadline = Instant::now() + ready_timeout;

    loop {
        match client.describe_table().table_name(table_name).send().await {
            Ok(output) => {
                let status = output.table().and_then(|table| table.table_status());
                if matches!(status, Some(TableStatus::Active)) {
                    tracing::info!(table_name = %table_name, "Table is active");
                    return Ok(());
                }
                tracing::debug!(table_name = %table_name, status = ?status, "Table not ready yet");
            }
            Err(SdkError::ServiceError(ref svc)) if svc.err().is_resource_not_found_exception() => {
                tracing::debug!(table_name = %table_name, "Table not visible yet");
            }
            Err(err) => return Err(err.into()),
        }

        if Instant::now() + READY_POLL_INTERVAL > deadline {
            return Err(ProvisionError::ReadyTimeout {
                table_name: table_name.to_string(),
                timeout: ready_timeout,
            });
        }

        sleep(READY_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_descriptor_schema() {
        let descriptor = TableDescriptor::items("items");
        assert_eq!(descriptor.table_name, "items");
        assert_eq!(descriptor.partition_key, "id");
        assert_eq!(descriptor.read_capacity, 1);
        assert_eq!(descriptor.write_capacity, 1);
    }
}
