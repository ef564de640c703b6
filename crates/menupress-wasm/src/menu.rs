//! Menu list WASM bindings: ordering for the admin list and refresh throttling.
//!
//! Items cross the boundary as plain JS objects (`{ id, name, price, categoryId, ... }`)
//! via `serde-wasm-bindgen`.
//!
//! # Example
//!
//! ```typescript
//! import { reorder_items, JsRefreshThrottle } from '@menupress/wasm';
//!
//! const previous = items;
//! setItems(reorder_items(items, oldIndex, newIndex));   // optimistic
//! try { await saveOrder(...) } catch { setItems(previous) }
//!
//! const throttle = new JsRefreshThrottle();
//! if (throttle.try_refresh()) reload();
//! ```

use menupress_core::cache::{Clock, RefreshThrottle, DEFAULT_REFRESH_COOLDOWN_MS};
use menupress_core::menu::{self, MenuItem};
use wasm_bindgen::prelude::*;

/// Move the item at `from` to `to`; every item's `order` becomes its index.
#[wasm_bindgen]
pub fn reorder_items(items: JsValue, from: usize, to: usize) -> Result<JsValue, JsValue> {
    let items: Vec<MenuItem> =
        serde_wasm_bindgen::from_value(items).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let moved = menu::move_item(&items, from, to).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&moved).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sort items by their stored `order` (missing counts as 0), as fetched lists are shown.
#[wasm_bindgen]
pub fn sort_items(items: JsValue) -> Result<JsValue, JsValue> {
    let mut items: Vec<MenuItem> =
        serde_wasm_bindgen::from_value(items).map_err(|e| JsValue::from_str(&e.to_string()))?;
    menu::sort_by_order(&mut items);
    serde_wasm_bindgen::to_value(&items).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `Date.now()` as a [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Cooldown between manual refreshes of the admin lists.
#[wasm_bindgen]
pub struct JsRefreshThrottle {
    inner: RefreshThrottle<JsClock>,
}

#[wasm_bindgen]
impl JsRefreshThrottle {
    /// Create a throttle; `cooldown_ms` defaults to 2000.
    #[wasm_bindgen(constructor)]
    pub fn new(cooldown_ms: Option<u32>) -> JsRefreshThrottle {
        let cooldown = cooldown_ms.map_or(DEFAULT_REFRESH_COOLDOWN_MS, u64::from);
        JsRefreshThrottle {
            inner: RefreshThrottle::new(JsClock, cooldown),
        }
    }

    /// Returns true and starts the cooldown if a refresh is allowed now.
    pub fn try_refresh(&mut self) -> bool {
        self.inner.try_refresh()
    }

    /// Milliseconds until the next refresh is allowed.
    pub fn remaining_ms(&self) -> f64 {
        self.inner.remaining_ms() as f64
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

/// WASM-specific tests; these need a JS host for `Date.now()` and `JsValue`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn item(id: &str, order: Option<u32>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            price: 10.0,
            rating: 0.0,
            image: String::new(),
            category_id: "mains".to_string(),
            order,
        }
    }

    #[wasm_bindgen_test]
    fn test_reorder_items() {
        let items = serde_wasm_bindgen::to_value(&vec![item("a", None), item("b", None)]).unwrap();
        let moved: Vec<MenuItem> =
            serde_wasm_bindgen::from_value(reorder_items(items, 1, 0).unwrap()).unwrap();

        assert_eq!(moved[0].id, "b");
        assert_eq!(moved[0].order, Some(0));
        assert_eq!(moved[1].order, Some(1));
    }

    #[wasm_bindgen_test]
    fn test_reorder_items_bad_index() {
        let items = serde_wasm_bindgen::to_value(&vec![item("a", None)]).unwrap();
        assert!(reorder_items(items, 0, 4).is_err());
    }

    #[wasm_bindgen_test]
    fn test_sort_items() {
        let items =
            serde_wasm_bindgen::to_value(&vec![item("a", Some(2)), item("b", Some(1))]).unwrap();
        let sorted: Vec<MenuItem> =
            serde_wasm_bindgen::from_value(sort_items(items).unwrap()).unwrap();
        assert_eq!(sorted[0].id, "b");
    }

    #[wasm_bindgen_test]
    fn test_throttle() {
        let mut throttle = JsRefreshThrottle::new(Some(60_000));
        assert!(throttle.try_refresh());
        assert!(!throttle.try_refresh());
        assert!(throttle.remaining_ms() > 0.0);
        throttle.reset();
        assert!(throttle.try_refresh());
    }
}
