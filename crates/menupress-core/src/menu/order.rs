//! Drag-and-drop reordering of menu items.
//!
//! The admin list applies a reorder immediately and writes it to the store in
//! the background. If that write fails the list snaps back to what it was.

use super::{MenuError, MenuItem};

/// Sort items by their stored position; items without one sort as 0.
///
/// The sort is stable, so unordered items keep their fetch order.
pub fn sort_by_order(items: &mut [MenuItem]) {
    items.sort_by_key(MenuItem::sort_key);
}

/// Move the item at `from` to `to` and renumber every item's `order` to its index.
///
/// # Errors
///
/// `MenuError::IndexOutOfRange` if either index is past the end.
pub fn move_item(items: &[MenuItem], from: usize, to: usize) -> Result<Vec<MenuItem>, MenuError> {
    for index in [from, to] {
        if index >= items.len() {
            return Err(MenuError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
    }

    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    renumber(&mut moved);
    Ok(moved)
}

/// Set each item's `order` to its position in the slice.
pub fn renumber(items: &mut [MenuItem]) {
    for (index, item) in items.iter_mut().enumerate() {
        item.order = Some(index as u32);
    }
}

/// A reorder that has been shown to the user but not yet confirmed by the store.
#[derive(Debug)]
#[must_use = "an in-flight reorder must be committed or rolled back"]
pub struct OptimisticReorder {
    previous: Vec<MenuItem>,
}

impl OptimisticReorder {
    /// Apply the move and keep the current list as the rollback snapshot.
    ///
    /// Returns the guard and the list to display right away.
    pub fn begin(
        current: &[MenuItem],
        from: usize,
        to: usize,
    ) -> Result<(Self, Vec<MenuItem>), MenuError> {
        let reordered = move_item(current, from, to)?;
        Ok((
            Self {
                previous: current.to_vec(),
            },
            reordered,
        ))
    }

    /// The store accepted the new order.
    pub fn commit(self) {}

    /// The store rejected the new order; returns the list to restore.
    pub fn rollback(self) -> Vec<MenuItem> {
        tracing::warn!(items = self.previous.len(), "reorder failed, restoring previous order");
        self.previous
    }
}
