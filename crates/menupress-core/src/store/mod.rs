//! The document store behind the admin panel, and the cached service in front of it.
//!
//! The hosted database is reached through [`MenuStore`]; [`MemoryStore`] is
//! the in-process implementation. [`MenuService`] puts the 30 second read
//! caches in front of any store and drops them on every write.

mod memory;
mod service;

pub use memory::MemoryStore;
pub use service::{MenuService, ReorderOutcome, UploadError};

use thiserror::Error;

use crate::menu::{Category, MenuItem, MenuItemPatch, NewMenuItem};

/// Collection holding categories.
pub const CATEGORIES: &str = "categories";
/// Collection holding dishes.
pub const MENU: &str = "menu";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no document {id} in {collection}")]
    NotFound { collection: &'static str, id: String },

    /// The backing database refused or failed the operation.
    #[error("document store error: {0}")]
    Backend(String),
}

/// CRUD over the `categories` and `menu` collections.
///
/// Identifiers are assigned by the store on create.
pub trait MenuStore {
    fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
    fn add_category(&mut self, name: &str) -> Result<String, StoreError>;
    fn update_category(&mut self, id: &str, name: &str) -> Result<(), StoreError>;
    fn delete_category(&mut self, id: &str) -> Result<(), StoreError>;

    fn list_items(&self) -> Result<Vec<MenuItem>, StoreError>;
    fn add_item(&mut self, item: NewMenuItem) -> Result<MenuItem, StoreError>;
    fn update_item(&mut self, id: &str, patch: MenuItemPatch) -> Result<(), StoreError>;
    fn delete_item(&mut self, id: &str) -> Result<(), StoreError>;

    /// Write `order = index` for every item in one batch.
    fn update_items_order(&mut self, items: &[MenuItem]) -> Result<(), StoreError>;
}
