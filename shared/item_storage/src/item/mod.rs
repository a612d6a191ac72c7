//! Item storage integration using DynamoDB
//!
//! Items are the only business entity: a string key and a display name
//! derived from it. Writes are unconditional puts, so re-writing an id
//! silently overwrites the prior record. There is no update or delete path;
//! reads exist only for direct table observation.

mod error;

use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoDbClient};
use serde::{Deserialize, Serialize};
use strum::Display;

pub use error::{ItemStorageError, ItemStorageResult};

use crate::handle::HandleManager;

/// Attribute names for the items table
#[derive(Debug, Clone, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ItemAttribute {
    /// Item id (Partition Key)
    Id,
    /// Derived display name
    Name,
}

/// Item data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item id (Partition Key)
    pub id: String,
    /// Derived display name, always `"Item <id>"`
    pub name: String,
}

impl Item {
    /// Builds an item with the display name derived from its id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = format!("Item {id}");
        Self { id, name }
    }
}

/// Item storage client for DynamoDB operations
pub struct ItemStorage {
    dynamodb_client: DynamoDbClient,
    table_name: String,
}

impl ItemStorage {
    /// Creates a new item storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured DynamoDB client
    /// * `table_name` - DynamoDB table name for items
    #[must_use]
    pub const fn new(dynamodb_client: DynamoDbClient, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Writes an item, overwriting any existing record with the same id.
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError` if the DynamoDB operation fails
    pub async fn put_item(&self, item: &Item) -> ItemStorageResult<()> {
        let dynamo_item = serde_dynamo::to_item(item)
            .map_err(|e| ItemStorageError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(dynamo_item))
            .send()
            .await?;

        Ok(())
    }

    /// Gets an item by id
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError` if the DynamoDB operation fails
    pub async fn get_by_id(&self, id: &str) -> ItemStorageResult<Option<Item>> {
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(
                ItemAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await?;

        let item = response
            .item()
            .map(|item| serde_dynamo::from_item(item.clone()))
            .transpose()
            .map_err(|e| ItemStorageError::SerializationError(e.to_string()))?;

        Ok(item)
    }
}

/// Write capability the request handler depends on.
///
/// Production wiring supplies a [`ScopedItemWriter`]; tests supply an
/// in-memory stand-in fulfilling the same contract.
#[async_trait]
pub trait ItemWriter: Send + Sync {
    /// Writes one item (unconditional upsert).
    async fn put(&self, item: &Item) -> ItemStorageResult<()>;
}

/// Production [`ItemWriter`] backed by per-operation handles.
///
/// Every write acquires a fresh handle from its [`HandleManager`], issues
/// exactly one put, and drops the handle before returning. No handle
/// outlives the write that opened it.
pub struct ScopedItemWriter {
    handle_manager: HandleManager,
    table_name: String,
}

impl ScopedItemWriter {
    /// Creates a writer targeting `table_name` through `handle_manager`.
    #[must_use]
    pub const fn new(handle_manager: HandleManager, table_name: String) -> Self {
        Self {
            handle_manager,
            table_name,
        }
    }
}

#[async_trait]
impl ItemWriter for ScopedItemWriter {
    async fn put(&self, item: &Item) -> ItemStorageResult<()> {
        let handle = self.handle_manager.acquire().await;
        let storage = ItemStorage::new(handle.client().clone(), self.table_name.clone());
        storage.put_item(item).await
        // `handle` is dropped here, releasing the connection for this scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name_is_derived_from_id() {
        let item = Item::new("abc");
        assert_eq!(item.id, "abc");
        assert_eq!(item.name, "Item abc");
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(ItemAttribute::Id.to_string(), "id");
        assert_eq!(ItemAttribute::Name.to_string(), "name");
    }
}
