//! Menu data: categories, dishes, and their display order.

mod order;
mod types;

pub use order::{move_item, renumber, sort_by_order, OptimisticReorder};
pub use types::{Category, MenuData, MenuItem, MenuItemPatch, NewMenuItem};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}
