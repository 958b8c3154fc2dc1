use serde::{Deserialize, Serialize};

use crate::common::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: Option<String>,
    pub description: String,
    pub completed: bool,
}

/// Request body for creating a task. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Entity for Task {
    type Draft = NewTask;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: NewTask) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: false,
        }
    }
}
