use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{ApiError, TodoId};

/// Persisted shape of a todo. `id` and `created_at` are assigned once at
/// creation and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDocument {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TodoId::generate(),
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Wire shape of a todo, with the identifier in its hex string encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoView {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&TodoDocument> for TodoView {
    fn from(doc: &TodoDocument) -> Self {
        Self {
            id: doc.id.to_string(),
            title: doc.title.clone(),
            completed: doc.completed,
            created_at: doc.created_at,
        }
    }
}

impl TryFrom<&TodoView> for TodoDocument {
    type Error = ApiError;

    fn try_from(view: &TodoView) -> Result<Self, ApiError> {
        Ok(Self {
            id: TodoId::parse(&view.id)?,
            title: view.title.clone(),
            completed: view.completed,
            created_at: view.created_at,
        })
    }
}
