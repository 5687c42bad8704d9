pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::core::{StoreError, TodoDocument, TodoId};

/// Access to the single todo collection. Implementations must be safe for
/// concurrent use; one long-lived handle is shared by every request.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// All documents in insertion order.
    async fn list_all(&self) -> Result<Vec<TodoDocument>, StoreError>;

    /// Persists a document verbatim; the caller has already assigned the
    /// identifier and creation timestamp.
    async fn insert(&self, doc: &TodoDocument) -> Result<(), StoreError>;

    /// Replaces title and completed of the matching document. Matching
    /// nothing is a no-op success, not an error.
    async fn update_by_id(
        &self,
        id: TodoId,
        title: &str,
        completed: bool,
    ) -> Result<(), StoreError>;

    /// Removes the matching document; succeeds even when nothing matched.
    async fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError>;
}
