use uuid::Uuid;

use super::{MenuStore, StoreError, CATEGORIES, MENU};
use crate::menu::{Category, MenuItem, MenuItemPatch, NewMenuItem};

/// In-process document store. Documents come back in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    categories: Vec<Category>,
    items: Vec<MenuItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn category_mut(&mut self, id: &str) -> Result<&mut Category, StoreError> {
        self.categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: CATEGORIES,
                id: id.to_string(),
            })
    }

    fn item_index(&self, id: &str) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: MENU,
                id: id.to_string(),
            })
    }
}

impl MenuStore for MemoryStore {
    fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.clone())
    }

    fn add_category(&mut self, name: &str) -> Result<String, StoreError> {
        let id = Self::new_id();
        self.categories.push(Category {
            id: id.clone(),
            name: name.to_string(),
        });
        Ok(id)
    }

    fn update_category(&mut self, id: &str, name: &str) -> Result<(), StoreError> {
        self.category_mut(id)?.name = name.to_string();
        Ok(())
    }

    fn delete_category(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return Err(StoreError::NotFound {
                collection: CATEGORIES,
                id: id.to_string(),
            });
        }
        Ok(())
    }

    fn list_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.items.clone())
    }

    fn add_item(&mut self, item: NewMenuItem) -> Result<MenuItem, StoreError> {
        let item = item.with_id(Self::new_id());
        self.items.push(item.clone());
        Ok(item)
    }

    fn update_item(&mut self, id: &str, patch: MenuItemPatch) -> Result<(), StoreError> {
        let index = self.item_index(id)?;
        patch.apply_to(&mut self.items[index]);
        Ok(())
    }

    fn delete_item(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self.item_index(id)?;
        self.items.remove(index);
        Ok(())
    }

    fn update_items_order(&mut self, items: &[MenuItem]) -> Result<(), StoreError> {
        // All-or-nothing, like a batched write.
        let indices = items
            .iter()
            .map(|item| self.item_index(&item.id))
            .collect::<Result<Vec<_>, _>>()?;

        for (order, index) in indices.into_iter().enumerate() {
            self.items[index].order = Some(order as u32);
        }
        Ok(())
    }
}
