//! In-memory entity store
//!
//! 每种实体一个 `MemoryStore`，内部由一把 `parking_lot::RwLock` 保护，
//! 锁只在单次操作内持有，从不跨越 `.await`。

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use super::{Entity, EntityStore, Filter, Patch, StoreError, StoreResult};

struct Inner<E: Entity> {
    records: HashMap<E::Id, E>,
    /// Insertion order of live ids
    order: Vec<E::Id>,
    /// Deleted ids, never handed out again
    retired: HashSet<E::Id>,
}

impl<E: Entity> Inner<E> {
    fn get_mut(&mut self, id: &E::Id) -> StoreResult<&mut E> {
        self.records
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(E::RESOURCE, id))
    }
}

/// Insertion-ordered store for one entity kind
pub struct MemoryStore<E: Entity> {
    inner: RwLock<Inner<E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: HashMap::new(),
                order: Vec::new(),
                retired: HashSet::new(),
            }),
        }
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.inner.read().records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` against the record under the write lock
    ///
    /// `f` works on a copy; the copy replaces the stored record only when
    /// `f` succeeds, so a failed closure leaves the store unchanged.
    pub fn modify<T>(
        &self,
        id: &E::Id,
        f: impl FnOnce(&mut E) -> StoreResult<T>,
    ) -> StoreResult<(E, T)> {
        let mut inner = self.inner.write();
        let record = inner.get_mut(id)?;

        let mut draft = record.clone();
        let out = f(&mut draft)?;
        *record = draft.clone();
        Ok((draft, out))
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    fn get_all(&self) -> Vec<(E::Id, E)> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).map(|r| (id.clone(), r.clone())))
            .collect()
    }

    fn get(&self, id: &E::Id) -> StoreResult<E> {
        self.inner
            .read()
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(E::RESOURCE, id))
    }

    fn create(&self, id: E::Id, record: E) -> StoreResult<E> {
        if record.id() != id {
            return Err(StoreError::invalid(format!(
                "{} id {} does not match record id {}",
                E::RESOURCE,
                id,
                record.id()
            )));
        }

        let mut inner = self.inner.write();
        if inner.records.contains_key(&id) || inner.retired.contains(&id) {
            return Err(StoreError::conflict(E::RESOURCE, &id));
        }

        inner.order.push(id.clone());
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    fn update(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E> {
        let mut inner = self.inner.write();
        let record = inner.get_mut(id)?;

        if patch.is_empty() {
            return Err(StoreError::EmptyPatch);
        }
        patch.apply(record);
        Ok(record.clone())
    }

    fn delete(&self, id: &E::Id) -> StoreResult<E> {
        let mut inner = self.inner.write();
        let record = inner
            .records
            .remove(id)
            .ok_or_else(|| StoreError::not_found(E::RESOURCE, id))?;

        inner.order.retain(|k| k != id);
        inner.retired.insert(id.clone());
        Ok(record)
    }

    fn query(&self, filter: &dyn Filter<E>) -> Vec<E> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id))
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }
}
