use thiserror::Error;
use tracing::{debug, info};

use super::{MenuStore, StoreError};
use crate::cache::{CacheConfig, Clock, TtlCache};
use crate::compress::{
    compress_image_with, CompressError, CompressOptions, ImageBackend, UploadProgress,
    UploadStage,
};
use crate::menu::{
    sort_by_order, Category, MenuData, MenuError, MenuItem, MenuItemPatch, NewMenuItem,
    OptimisticReorder,
};

/// Failure of the add-dish workflow.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The picture could not be compressed; nothing was written.
    #[error(transparent)]
    Compress(#[from] CompressError),

    /// The picture was compressed but the record was not saved.
    #[error("could not save dish: {0}")]
    Store(#[from] StoreError),
}

/// Result of a drag-and-drop reorder pushed to the store.
#[derive(Debug)]
pub enum ReorderOutcome {
    /// The store took the new order; show these items.
    Committed(Vec<MenuItem>),
    /// The store failed; show the restored items and report the error.
    RolledBack {
        items: Vec<MenuItem>,
        error: StoreError,
    },
}

impl ReorderOutcome {
    /// The list the admin panel should display.
    pub fn items(&self) -> &[MenuItem] {
        match self {
            ReorderOutcome::Committed(items) | ReorderOutcome::RolledBack { items, .. } => items,
        }
    }
}

/// A [`MenuStore`] with time-boxed caches on the two list reads.
///
/// Every write through the service invalidates the cache it affects.
pub struct MenuService<S, C> {
    store: S,
    categories: TtlCache<Vec<Category>, C>,
    items: TtlCache<Vec<MenuItem>, C>,
}

impl<S: MenuStore, C: Clock + Clone> MenuService<S, C> {
    pub fn new(store: S, clock: C, config: &CacheConfig) -> Self {
        Self {
            store,
            categories: TtlCache::new(clock.clone(), config.categories_ttl_ms),
            items: TtlCache::new(clock, config.items_ttl_ms),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn categories(&mut self) -> Result<Vec<Category>, StoreError> {
        if let Some(cached) = self.categories.get() {
            debug!("returning cached categories");
            return Ok(cached.clone());
        }
        debug!("fetching categories from store");
        let fresh = self.store.list_categories()?;
        self.categories.set(fresh.clone());
        Ok(fresh)
    }

    pub fn items(&mut self) -> Result<Vec<MenuItem>, StoreError> {
        if let Some(cached) = self.items.get() {
            debug!("returning cached menu items");
            return Ok(cached.clone());
        }
        debug!("fetching menu items from store");
        let fresh = self.store.list_items()?;
        self.items.set(fresh.clone());
        Ok(fresh)
    }

    /// Categories plus items in display order, for the public menu page.
    pub fn public_menu(&mut self) -> Result<MenuData, StoreError> {
        let categories = self.categories()?;
        let mut items = self.items()?;
        sort_by_order(&mut items);
        Ok(MenuData { categories, items })
    }

    pub fn add_category(&mut self, name: &str) -> Result<String, StoreError> {
        let id = self.store.add_category(name)?;
        self.categories.invalidate();
        Ok(id)
    }

    pub fn update_category(&mut self, id: &str, name: &str) -> Result<(), StoreError> {
        self.store.update_category(id, name)?;
        self.categories.invalidate();
        Ok(())
    }

    pub fn delete_category(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.delete_category(id)?;
        self.categories.invalidate();
        Ok(())
    }

    pub fn add_item(&mut self, item: NewMenuItem) -> Result<MenuItem, StoreError> {
        let added = self.store.add_item(item)?;
        self.items.invalidate();
        Ok(added)
    }

    pub fn update_item(&mut self, id: &str, patch: MenuItemPatch) -> Result<(), StoreError> {
        self.store.update_item(id, patch)?;
        self.items.invalidate();
        Ok(())
    }

    pub fn delete_item(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.delete_item(id)?;
        self.items.invalidate();
        Ok(())
    }

    pub fn update_items_order(&mut self, items: &[MenuItem]) -> Result<(), StoreError> {
        self.store.update_items_order(items)?;
        self.items.invalidate();
        Ok(())
    }

    /// Compress the picked picture, then save `item` with it as its image.
    ///
    /// Progress runs through the encoding stage (0, 50, 100) and then the
    /// saving stage (0 before the write, 100 after it). A compression failure
    /// stops before any saving event.
    pub fn upload_dish<F>(
        &mut self,
        bytes: &[u8],
        mut item: NewMenuItem,
        options: &CompressOptions,
        mut on_progress: F,
    ) -> Result<MenuItem, UploadError>
    where
        F: FnMut(UploadProgress),
    {
        let backend = ImageBackend::new(options.filter);
        let compressed = compress_image_with(&backend, bytes, options, &mut on_progress)?;

        on_progress(UploadProgress::new(
            UploadStage::Saving,
            0,
            "Saving dish data...",
        ));
        item.image = compressed.data_uri;
        let added = self.add_item(item)?;
        info!(id = %added.id, name = %added.name, "dish added");
        on_progress(UploadProgress::new(
            UploadStage::Saving,
            100,
            "Dish added successfully!",
        ));

        Ok(added)
    }

    /// Move one item in `current`, write the new order, and roll back on failure.
    ///
    /// # Errors
    ///
    /// Only a bad index is an error; store failures come back as
    /// [`ReorderOutcome::RolledBack`].
    pub fn reorder(
        &mut self,
        current: &[MenuItem],
        from: usize,
        to: usize,
    ) -> Result<ReorderOutcome, MenuError> {
        let (pending, shown) = OptimisticReorder::begin(current, from, to)?;
        Ok(match self.update_items_order(&shown) {
            Ok(()) => {
                pending.commit();
                ReorderOutcome::Committed(shown)
            }
            Err(error) => ReorderOutcome::RolledBack {
                items: pending.rollback(),
                error,
            },
        })
    }

    /// Forget both cached lists.
    pub fn invalidate_all(&mut self) {
        self.categories.invalidate();
        self.items.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::store::MemoryStore;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use std::cell::Cell;

    /// Store wrapper that counts list reads and can fail reorders.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        list_calls: Cell<u32>,
        fail_order_writes: bool,
        fail_item_writes: bool,
    }

    impl MenuStore for CountingStore {
        fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.inner.list_categories()
        }
        fn add_category(&mut self, name: &str) -> Result<String, StoreError> {
            self.inner.add_category(name)
        }
        fn update_category(&mut self, id: &str, name: &str) -> Result<(), StoreError> {
            self.inner.update_category(id, name)
        }
        fn delete_category(&mut self, id: &str) -> Result<(), StoreError> {
            self.inner.delete_category(id)
        }
        fn list_items(&self) -> Result<Vec<MenuItem>, StoreError> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.inner.list_items()
        }
        fn add_item(&mut self, item: NewMenuItem) -> Result<MenuItem, StoreError> {
            if self.fail_item_writes {
                return Err(StoreError::Backend("permission denied".to_string()));
            }
            self.inner.add_item(item)
        }
        fn update_item(&mut self, id: &str, patch: MenuItemPatch) -> Result<(), StoreError> {
            self.inner.update_item(id, patch)
        }
        fn delete_item(&mut self, id: &str) -> Result<(), StoreError> {
            self.inner.delete_item(id)
        }
        fn update_items_order(&mut self, items: &[MenuItem]) -> Result<(), StoreError> {
            if self.fail_order_writes {
                return Err(StoreError::Backend("quota exceeded".to_string()));
            }
            self.inner.update_items_order(items)
        }
    }

    fn service() -> (MenuService<CountingStore, ManualClock>, ManualClock) {
        let clock = ManualClock::new(1_000);
        let service = MenuService::new(
            CountingStore::default(),
            clock.clone(),
            &CacheConfig::default(),
        );
        (service, clock)
    }

    fn dish(name: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: None,
            price: 8.0,
            rating: 0.0,
            image: String::new(),
            category_id: "mains".to_string(),
            order: None,
        }
    }

    #[test]
    fn test_reads_are_cached() {
        let (mut service, _) = service();
        service.categories().unwrap();
        service.categories().unwrap();
        assert_eq!(service.store().list_calls.get(), 1);
    }

    #[test]
    fn test_cache_expires() {
        let (mut service, clock) = service();
        service.items().unwrap();
        clock.advance(30_000);
        service.items().unwrap();
        assert_eq!(service.store().list_calls.get(), 2);
    }

    #[test]
    fn test_writes_invalidate() {
        let (mut service, _) = service();
        assert!(service.categories().unwrap().is_empty());

        let id = service.add_category("Soups").unwrap();
        assert_eq!(service.categories().unwrap()[0].name, "Soups");

        service.update_category(&id, "Broths").unwrap();
        assert_eq!(service.categories().unwrap()[0].name, "Broths");

        service.delete_category(&id).unwrap();
        assert!(service.categories().unwrap().is_empty());
    }

    #[test]
    fn test_item_writes_invalidate() {
        let (mut service, _) = service();
        assert!(service.items().unwrap().is_empty());

        let added = service.add_item(dish("Goulash")).unwrap();
        assert_eq!(service.items().unwrap().len(), 1);

        let patch = MenuItemPatch {
            name: Some("Beef goulash".to_string()),
            ..Default::default()
        };
        service.update_item(&added.id, patch).unwrap();
        assert_eq!(service.items().unwrap()[0].name, "Beef goulash");

        service.delete_item(&added.id).unwrap();
        assert!(service.items().unwrap().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_cache() {
        let (mut service, _) = service();
        service.categories().unwrap();
        assert!(service.update_category("missing", "x").is_err());
        service.categories().unwrap();
        assert_eq!(service.store().list_calls.get(), 1);
    }

    #[test]
    fn test_invalidate_all() {
        let (mut service, _) = service();
        service.categories().unwrap();
        service.items().unwrap();
        service.invalidate_all();
        service.categories().unwrap();
        service.items().unwrap();
        assert_eq!(service.store().list_calls.get(), 4);
    }

    #[test]
    fn test_public_menu_sorted() {
        let (mut service, _) = service();
        service.add_category("Mains").unwrap();
        let a = service.add_item(dish("a")).unwrap();
        let b = service.add_item(dish("b")).unwrap();
        service.update_items_order(&[b, a]).unwrap();

        let menu = service.public_menu().unwrap();
        assert_eq!(menu.categories.len(), 1);
        let names: Vec<&str> = menu.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_reorder_commits() {
        let (mut service, _) = service();
        service.add_item(dish("a")).unwrap();
        service.add_item(dish("b")).unwrap();
        let current = service.items().unwrap();

        let outcome = service.reorder(&current, 1, 0).unwrap();
        assert!(matches!(outcome, ReorderOutcome::Committed(_)));

        let stored = service.public_menu().unwrap().items;
        let names: Vec<&str> = stored.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_reorder_rolls_back_on_store_failure() {
        let (mut service, _) = service();
        service.add_item(dish("a")).unwrap();
        service.add_item(dish("b")).unwrap();
        let current = service.items().unwrap();
        service.store.fail_order_writes = true;

        let outcome = service.reorder(&current, 1, 0).unwrap();
        match &outcome {
            ReorderOutcome::RolledBack { items, error } => {
                assert_eq!(items, &current);
                assert_eq!(error, &StoreError::Backend("quota exceeded".to_string()));
            }
            ReorderOutcome::Committed(_) => panic!("expected rollback"),
        }
        assert_eq!(outcome.items(), current.as_slice());
    }

    #[test]
    fn test_reorder_bad_index() {
        let (mut service, _) = service();
        assert!(matches!(
            service.reorder(&[], 0, 0),
            Err(MenuError::IndexOutOfRange { .. })
        ));
    }

    fn photo_png(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![140u8; (width * height * 3) as usize];
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&pixels, width, height, ExtendedColorType::Rgb8)
            .unwrap();
        out
    }

    #[test]
    fn test_upload_dish_saves_compressed_image() {
        let (mut service, _) = service();
        assert!(service.items().unwrap().is_empty());

        let added = service
            .upload_dish(
                &photo_png(1200, 900),
                dish("Lasagna"),
                &CompressOptions::default(),
                |_| {},
            )
            .unwrap();

        assert!(added.image.starts_with("data:image/jpeg;base64,"));
        let items = service.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], added);
    }

    #[test]
    fn test_upload_dish_progress_sequence() {
        let (mut service, _) = service();
        let mut seen = Vec::new();
        service
            .upload_dish(
                &photo_png(40, 30),
                dish("Tiramisu"),
                &CompressOptions::default(),
                |p| seen.push((p.stage, p.progress, p.overall_percent())),
            )
            .unwrap();

        let stages: Vec<(UploadStage, u8)> = seen.iter().map(|&(s, p, _)| (s, p)).collect();
        assert_eq!(
            stages,
            vec![
                (UploadStage::Encoding, 0),
                (UploadStage::Encoding, 50),
                (UploadStage::Encoding, 100),
                (UploadStage::Saving, 0),
                (UploadStage::Saving, 100),
            ]
        );
        let overall: Vec<f32> = seen.iter().map(|&(_, _, o)| o).collect();
        assert!(overall.windows(2).all(|w| w[0] <= w[1]));
        assert!((overall[4] - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_upload_dish_compression_failure_skips_saving() {
        let (mut service, _) = service();
        let mut stages = Vec::new();
        let result = service.upload_dish(
            b"not a picture",
            dish("Ghost"),
            &CompressOptions::default(),
            |p| stages.push(p.stage),
        );

        assert!(matches!(result, Err(UploadError::Compress(_))));
        assert!(!stages.contains(&UploadStage::Saving));
        assert!(service.items().unwrap().is_empty());
    }

    #[test]
    fn test_upload_dish_store_failure_stops_at_saving_start() {
        let (mut service, _) = service();
        service.store.fail_item_writes = true;
        let mut seen = Vec::new();
        let result = service.upload_dish(
            &photo_png(20, 20),
            dish("Flan"),
            &CompressOptions::default(),
            |p| seen.push((p.stage, p.progress)),
        );

        assert!(matches!(result, Err(UploadError::Store(_))));
        assert_eq!(seen.last(), Some(&(UploadStage::Saving, 0)));
    }
}
