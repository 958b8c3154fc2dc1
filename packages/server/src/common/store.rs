//! Record storage for the CRUD services.
//!
//! Handlers only see [`Store`]; [`MemoryStore`] is the implementation the
//! server runs with. Ids start at 1 and are never handed out twice, even
//! after the record holding one is removed.

use async_trait::async_trait;
use tokio::sync::RwLock;

/// A record that can be kept in a [`Store`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Everything needed to build the record except its id.
    type Draft: Send + 'static;

    fn id(&self) -> u64;

    fn from_draft(id: u64, draft: Self::Draft) -> Self;
}

/// In-place edit applied by [`Store::update`].
pub type Edit<E> = Box<dyn FnOnce(&mut E) + Send>;

#[async_trait]
pub trait Store<E: Entity>: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<E>;

    async fn get(&self, id: u64) -> Option<E>;

    /// Assign the next id and keep the record.
    async fn insert(&self, draft: E::Draft) -> E;

    /// Apply `edit` to the record with `id`, returning the updated record.
    async fn update(&self, id: u64, edit: Edit<E>) -> Option<E>;

    /// Remove and return the record with `id`.
    async fn remove(&self, id: u64) -> Option<E>;
}

struct Inner<E> {
    records: Vec<E>,
    next_id: u64,
}

/// In-memory store. Data is lost on restart.
pub struct MemoryStore<E> {
    inner: RwLock<Inner<E>>,
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl<E: Entity> Store<E> for MemoryStore<E> {
    async fn list(&self) -> Vec<E> {
        self.inner.read().await.records.clone()
    }

    async fn get(&self, id: u64) -> Option<E> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    async fn insert(&self, draft: E::Draft) -> E {
        let mut inner = self.inner.write().await;
        let record = E::from_draft(inner.next_id, draft);
        inner.next_id += 1;
        inner.records.push(record.clone());
        record
    }

    async fn update(&self, id: u64, edit: Edit<E>) -> Option<E> {
        let mut inner = self.inner.write().await;
        let record = inner.records.iter_mut().find(|r| r.id() == id)?;
        edit(record);
        Some(record.clone())
    }

    async fn remove(&self, id: u64) -> Option<E> {
        let mut inner = self.inner.write().await;
        let index = inner.records.iter().position(|r| r.id() == id)?;
        Some(inner.records.remove(index))
    }
}
