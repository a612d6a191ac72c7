use std::sync::Arc;

use backend::{server, types::Environment};
use item_storage::config::StorageSettings;
use item_storage::handle::HandleManager;
use item_storage::item::{ItemWriter, ScopedItemWriter};
use item_storage::provision::{ensure_table, TableDescriptor};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Configure logging format based on environment
    // Use JSON format for staging/production, regular format for development
    let env_filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(environment.tracing_level().to_string()))
    };
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(env_filter()).init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter()).init();
        }
    }

    let settings = StorageSettings::from_env();
    let handle_manager = HandleManager::new(settings);
    let descriptor = TableDescriptor::items(environment.items_table_name());

    // Provision the items table before accepting traffic. The handle is
    // scoped to this block and released before the listener binds.
    {
        let handle = handle_manager.acquire().await;
        ensure_table(
            handle.client(),
            &descriptor,
            environment.table_ready_timeout(),
        )
        .await?;
    }

    tracing::info!(table_name = %descriptor.table_name, "✅ Provisioned items table");

    let items: Arc<dyn ItemWriter> =
        Arc::new(ScopedItemWriter::new(handle_manager, descriptor.table_name));

    server::start(items).await
}
