//! Scope-bound handle acquisition for DynamoDB
//!
//! Every logical operation (one HTTP request, or the startup provisioning
//! sequence) acquires its own [`StorageHandle`] and drops it when the scope
//! exits. Handles are never pooled or shared across scopes.

use aws_sdk_dynamodb::Client as DynamoDbClient;

use crate::config::StorageSettings;

/// Builds a fresh storage handle per logical operation.
#[derive(Debug, Clone)]
pub struct HandleManager {
    settings: StorageSettings,
}

impl HandleManager {
    /// Creates a manager bound to the given settings.
    ///
    /// Settings are captured at construction; redirecting to a different
    /// endpoint means constructing a new manager, not mutating this one.
    #[must_use]
    pub const fn new(settings: StorageSettings) -> Self {
        Self { settings }
    }

    /// Opens a fresh handle to the storage service.
    ///
    /// Each call builds a new SDK configuration and client from the current
    /// settings. Client construction is lazy: a connectivity failure surfaces
    /// on the first operation issued through the handle and propagates to the
    /// caller unchanged, with no retry.
    pub async fn acquire(&self) -> StorageHandle {
        let config = self.settings.sdk_config().await;
        StorageHandle {
            client: DynamoDbClient::new(&config),
        }
    }
}

/// A live session bound to the storage service.
///
/// Owned exclusively by the code path that acquired it. Dropping the handle
/// releases the underlying connection resources on every exit path,
/// including early returns and unwinding.
#[derive(Debug)]
pub struct StorageHandle {
    client: DynamoDbClient,
}

impl StorageHandle {
    /// The DynamoDB client for this handle's scope.
    #[must_use]
    pub const fn client(&self) -> &DynamoDbClient {
        &self.client
    }
}
