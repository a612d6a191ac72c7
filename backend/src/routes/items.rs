use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use item_storage::item::{Item, ItemWriter};
use serde::Serialize;

use crate::types::AppError;

/// Acknowledgment returned after a successful write
#[derive(Debug, Serialize)]
pub struct CreateItemResponse {
    /// Always `"success"`
    pub status: &'static str,
    /// The id that was written, echoed back verbatim
    pub item_id: String,
}

/// Creates an item in the items table
///
/// The id is taken verbatim from the URL-decoded path segment; no format
/// validation is applied. Writing the same id twice overwrites the prior
/// record. The write capability is injected so tests can supply an
/// in-memory stand-in.
pub async fn create_item(
    Path(item_id): Path<String>,
    Extension(items): Extension<Arc<dyn ItemWriter>>,
) -> Result<Json<CreateItemResponse>, AppError> {
    let item = Item::new(item_id.clone());
    items.put(&item).await?;

    Ok(Json(CreateItemResponse {
        status: "success",
        item_id,
    }))
}
