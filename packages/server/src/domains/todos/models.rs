use serde::{Deserialize, Serialize};

use crate::common::fields::present;
use crate::common::{ApiError, ApiResult, Entity};

/// A todo. `title` may be `null` when the client sent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: Option<String>,
    pub done: bool,
}

/// Request body for `POST /todos`. The `title` key is required, its value may be `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTodo {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default)]
    pub done: bool,
}

/// A validated [`NewTodo`].
#[derive(Debug, Clone)]
pub struct TodoDraft {
    pub title: Option<String>,
    pub done: bool,
}

impl NewTodo {
    pub fn validate(self) -> ApiResult<TodoDraft> {
        let title = self.title.ok_or(ApiError::BadRequest("Title is required"))?;
        Ok(TodoDraft {
            title,
            done: self.done,
        })
    }
}

/// Request body for `PUT /todos/:id`; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    pub done: Option<bool>,
}

impl TodoPatch {
    pub fn apply(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(done) = self.done {
            todo.done = done;
        }
    }
}

impl Entity for Todo {
    type Draft = TodoDraft;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: TodoDraft) -> Self {
        Self {
            id,
            title: draft.title,
            done: draft.done,
        }
    }
}
