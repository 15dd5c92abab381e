//! An ordered list mirrored to a durable store.

use super::errors::TableResult;
use super::ports::Store;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

/// An insertion-ordered sequence kept equal to a JSON array in a [`Store`].
///
/// The list owns exactly one storage key. Every mutation rewrites the whole
/// stored value; a mutation whose write fails is undone, so the in-memory
/// items and the stored mirror agree after every call that returns `Ok`.
///
/// # Examples
///
/// ```
/// use cardtable::domain::PersistentList;
/// use cardtable::infrastructure::MemoryStore;
///
/// let store = MemoryStore::default();
/// let mut list = PersistentList::init("numbers", store.clone()).unwrap();
/// list.append(1).unwrap();
/// list.append(2).unwrap();
/// assert_eq!(list.items(), &[1, 2]);
/// assert_eq!(store.raw("numbers").as_deref(), Some("[1,2]"));
/// ```
#[derive(Debug)]
pub struct PersistentList<T, S> {
    key: String,
    items: Vec<T>,
    store: S,
}

impl<T, S> PersistentList<T, S>
where
    T: Serialize + DeserializeOwned,
    S: Store,
{
    /// Restores the list stored at `key`, or starts empty.
    pub fn init(key: impl Into<String>, store: S) -> TableResult<Self> {
        Self::init_with_default(key, store, Vec::new())
    }

    /// Restores the list stored at `key`, or starts from `default`.
    ///
    /// An absent or empty slot counts as "nothing stored". The starting
    /// items are written back immediately so the slot exists afterwards.
    ///
    /// # Errors
    ///
    /// Fails if the store cannot be read or written, or if the stored text
    /// is not a JSON array of `T`.
    pub fn init_with_default(key: impl Into<String>, store: S, default: Vec<T>) -> TableResult<Self> {
        let key = key.into();
        let items = match store.get(&key)? {
            Some(raw) if !raw.is_empty() => serde_json::from_str(&raw)?,
            _ => default,
        };

        let list = Self { key, items, store };
        list.persist()?;
        info!(key = %list.key, len = list.items.len(), "list restored");
        Ok(list)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends `item` at the end and mirrors the list to the store.
    pub fn append(&mut self, item: T) -> TableResult<&T> {
        self.items.push(item);
        if let Err(e) = self.persist() {
            self.items.pop();
            warn!(key = %self.key, error = %e, "append not persisted, rolled back");
            return Err(e);
        }

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Empties the list and mirrors the empty array to the store.
    pub fn clear(&mut self) -> TableResult<()> {
        let previous = std::mem::take(&mut self.items);
        if let Err(e) = self.persist() {
            self.items = previous;
            warn!(key = %self.key, error = %e, "clear not persisted, rolled back");
            return Err(e);
        }
        Ok(())
    }

    fn persist(&self) -> TableResult<()> {
        let json = serde_json::to_string(&self.items)?;
        self.store.set(&self.key, &json)
    }
}
