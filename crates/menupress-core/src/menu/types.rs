//! Menu records as stored in the document store.

use serde::{Deserialize, Serialize};

/// A menu section such as "Starters" or "Desserts".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Server-assigned identifier.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    /// Compressed picture as a JPEG data URI. Opaque to everything but the browser.
    #[serde(default)]
    pub image: String,
    pub category_id: String,
    /// Position in the admin list; absent on records that were never reordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl MenuItem {
    /// Sort key used everywhere items are listed; a missing order counts as 0.
    pub fn sort_key(&self) -> u32 {
        self.order.unwrap_or(0)
    }
}

/// Payload for creating a dish; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl NewMenuItem {
    pub fn with_id(self, id: impl Into<String>) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: self.name,
            description: self.description,
            price: self.price,
            rating: self.rating,
            image: self.image,
            category_id: self.category_id,
            order: self.order,
        }
    }
}

/// Partial update of a dish; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl MenuItemPatch {
    pub fn apply_to(self, item: &mut MenuItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = Some(description);
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(rating) = self.rating {
            item.rating = rating;
        }
        if let Some(image) = self.image {
            item.image = image;
        }
        if let Some(category_id) = self.category_id {
            item.category_id = category_id;
        }
        if let Some(order) = self.order {
            item.order = Some(order);
        }
    }
}

/// Everything the public menu page renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuData {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
}

impl MenuData {
    /// Items belonging to `category_id`, in list order.
    pub fn items_in<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.iter().filter(move |i| i.category_id == category_id)
    }
}
