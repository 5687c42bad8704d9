use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::core::{StoreError, TodoDocument, TodoId};
use crate::storage::TodoStore;

/// In-process store double with the same contract as the real store. Used by
/// handler tests.
#[derive(Default)]
pub struct MemoryTodoStore {
    docs: Mutex<Vec<TodoDocument>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list_all(&self) -> Result<Vec<TodoDocument>, StoreError> {
        Ok(self.docs.lock().await.clone())
    }

    async fn insert(&self, doc: &TodoDocument) -> Result<(), StoreError> {
        self.docs.lock().await.push(doc.clone());
        Ok(())
    }

    async fn update_by_id(
        &self,
        id: TodoId,
        title: &str,
        completed: bool,
    ) -> Result<(), StoreError> {
        let mut docs = self.docs.lock().await;
        if let Some(doc) = docs.iter_mut().find(|d| d.id == id) {
            doc.title = title.to_string();
            doc.completed = completed;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: TodoId) -> Result<(), StoreError> {
        self.docs.lock().await.retain(|d| d.id != id);
        Ok(())
    }
}
