//! 实体存储 - 内存中的键值存储与 CRUD 约定
//!
//! # 结构
//!
//! - [`EntityStore`] - 每种实体统一的 CRUD 接口
//! - [`MemoryStore`] - 唯一实现：插入有序、每种实体一把读写锁
//! - [`repository`] - 跨实体规则 (外键检查、字段校验)
//! - [`seed`] - 演示数据
//!
//! 已删除的 id 永不复用：再次创建同一 id 返回 [`StoreError::Conflict`]。

pub mod error;
pub mod memory;
pub mod repository;
pub mod seed;
pub mod validation;

mod entity;

pub use entity::Resource;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use std::fmt::Display;
use std::hash::Hash;

/// A record kind the store can hold
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Display + Send + Sync + 'static;
    type Patch: Patch<Self>;

    const RESOURCE: Resource;

    /// Key the record is stored under
    fn id(&self) -> Self::Id;
}

/// Partial record: unset fields leave the stored value untouched
pub trait Patch<E> {
    fn is_empty(&self) -> bool;
    fn apply(self, record: &mut E);
}

/// Equality filter over records of kind `E`
pub trait Filter<E> {
    fn matches(&self, record: &E) -> bool;
}

/// CRUD contract shared by every entity kind
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Every record, in insertion order
    fn get_all(&self) -> Vec<(E::Id, E)>;

    fn get(&self, id: &E::Id) -> StoreResult<E>;

    /// Insert `record` under `id`. Fails with `Conflict` if the id is
    /// present or was deleted before.
    fn create(&self, id: E::Id, record: E) -> StoreResult<E>;

    /// Apply a non-empty patch and return the updated record
    fn update(&self, id: &E::Id, patch: E::Patch) -> StoreResult<E>;

    /// Remove and return the record; its id is retired
    fn delete(&self, id: &E::Id) -> StoreResult<E>;

    /// Records matching `filter`, in insertion order
    fn query(&self, filter: &dyn Filter<E>) -> Vec<E>;
}
