//! # Item Store & Workspace
//!
//! The shared editor state. The item collection is a single in-memory
//! aggregate mutated copy-on-write: every operation reads the current
//! snapshot, computes a new `Vec<Item>`, and replaces it whole. Safety
//! comes from the single-threaded, run-to-completion event model, not from
//! synchronization.
//!
//! Persistence is a collaborator behind the [`ItemStore`] trait with
//! replace-all semantics; callers never patch individual fields through
//! it. Saves are fire-and-forget: a failed save is logged and swallowed,
//! never surfaced to the mutation that triggered it.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use log::{debug, warn};

use crate::error::MaquetteError;
use crate::geometry::CanvasGeometry;
use crate::layout::{LayoutEngine, LayoutMode, LayoutParams};
use crate::model::{DocumentConfig, Item};
use crate::reconcile::reconcile_drag;

/// Replace-all persistence for the item collection.
pub trait ItemStore {
    fn load(&self) -> Result<Vec<Item>, MaquetteError>;
    fn save(&self, items: &[Item]) -> Result<(), MaquetteError>;
}

/// Stores the collection as a JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ItemStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Item>, MaquetteError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, items: &[Item]) -> Result<(), MaquetteError> {
        let raw = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory store for tests and headless embedding.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<Vec<Item>>,
    saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl ItemStore for MemoryStore {
    fn load(&self) -> Result<Vec<Item>, MaquetteError> {
        Ok(self.items.borrow().clone())
    }

    fn save(&self, items: &[Item]) -> Result<(), MaquetteError> {
        *self.items.borrow_mut() = items.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

/// The editor's shared state: the current item snapshot, the selection,
/// the active layout mode, and the geometry configuration.
pub struct Workspace<S: ItemStore> {
    items: Vec<Item>,
    selected: Option<String>,
    layout_mode: LayoutMode,
    config: DocumentConfig,
    engine: LayoutEngine,
    store: S,
}

impl<S: ItemStore> Workspace<S> {
    /// Open a workspace, loading the persisted collection from the store.
    pub fn open(config: DocumentConfig, store: S) -> Result<Self, MaquetteError> {
        let items = store.load()?;
        Ok(Self::with_items(config, store, items))
    }

    /// Build a workspace around an existing snapshot without loading.
    pub fn with_items(config: DocumentConfig, store: S, items: Vec<Item>) -> Self {
        let engine = LayoutEngine::with_params(LayoutParams {
            margin_width: config.margin_width_px,
            ..LayoutParams::default()
        });
        Self {
            items,
            selected: None,
            layout_mode: LayoutMode::default(),
            config,
            engine,
            store,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Count items whose local position currently lies inside the page
    /// bounds (drives the header badge; excludes margin-parked items).
    pub fn items_on_page(&self, page: usize) -> usize {
        let geometry = CanvasGeometry::from_config(&self.config);
        self.items
            .iter()
            .filter(|i| {
                i.page == page
                    && i.x >= 0.0
                    && i.y >= 0.0
                    && i.x < geometry.page_width
                    && i.y < geometry.page_height
            })
            .count()
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    /// Replace the whole collection (seed data reload).
    pub fn initialize_items(&mut self, items: Vec<Item>) {
        self.commit(items);
        self.selected = None;
    }

    /// Append an item (search-and-insert glue).
    pub fn insert_item(&mut self, item: Item) {
        let mut updated = self.items.clone();
        updated.push(item);
        self.commit(updated);
    }

    pub fn delete_item(&mut self, id: &str) {
        let updated: Vec<Item> = self.items.iter().filter(|i| i.id != id).cloned().collect();
        self.commit(updated);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    /// Toggle the highlight-border badge.
    pub fn toggle_border(&mut self, id: &str) {
        let updated: Vec<Item> = self
            .items
            .iter()
            .cloned()
            .map(|mut i| {
                if i.id == id {
                    i.has_border = !i.has_border;
                }
                i
            })
            .collect();
        self.commit(updated);
    }

    /// Toggle a discount-percentage badge on or off.
    pub fn toggle_percentage(&mut self, id: &str, percentage: u32) {
        let updated: Vec<Item> = self
            .items
            .iter()
            .cloned()
            .map(|mut i| {
                if i.id == id {
                    match i.percentages.iter().position(|&p| p == percentage) {
                        Some(pos) => {
                            i.percentages.remove(pos);
                        }
                        None => i.percentages.push(percentage),
                    }
                }
                i
            })
            .collect();
        self.commit(updated);
    }

    /// Drag-end: commit a new local position, retargeting the item's page
    /// when the drop crossed a page boundary.
    pub fn move_item(&mut self, id: &str, x: f64, y: f64) {
        let geometry = CanvasGeometry::from_config(&self.config);
        let updated: Vec<Item> = self
            .items
            .iter()
            .cloned()
            .map(|mut i| {
                if i.id == id {
                    let pos = reconcile_drag(x, y, i.page, &geometry);
                    debug!(
                        "move {id}: ({x}, {y}) on page {} -> ({}, {}) on page {}",
                        i.page, pos.x, pos.y, pos.page
                    );
                    i.x = pos.x;
                    i.y = pos.y;
                    i.page = pos.page;
                }
                i
            })
            .collect();
        self.commit(updated);
    }

    /// Auto-layout one page with live pixel dimensions, then advance the
    /// layout mode. Persists even when the pass changed nothing.
    pub fn auto_layout_page(&mut self, page: usize, page_width: f64, page_height: f64) {
        let geometry = self.live_geometry(page_width, page_height);
        let updated = self
            .engine
            .layout_page(&self.items, page, &geometry, self.layout_mode);
        self.commit(updated);
        self.layout_mode = self.layout_mode.next();
    }

    /// Auto-layout every page, folding into one collection and persisting
    /// once, then advance the layout mode.
    pub fn auto_layout_all_pages(&mut self, page_width: f64, page_height: f64) {
        let geometry = self.live_geometry(page_width, page_height);
        let updated = self
            .engine
            .layout_all_pages(&self.items, &geometry, self.layout_mode);
        self.commit(updated);
        self.layout_mode = self.layout_mode.next();
    }

    /// Advance the sort mode without laying anything out.
    pub fn cycle_layout_mode(&mut self) {
        self.layout_mode = self.layout_mode.next();
    }

    fn live_geometry(&self, page_width: f64, page_height: f64) -> CanvasGeometry {
        CanvasGeometry::with_page_size(
            page_width,
            page_height,
            self.config.page_gap_px,
            self.config.total_pages,
        )
    }

    /// Replace the snapshot and fire-and-forget persist it.
    fn commit(&mut self, items: Vec<Item>) {
        self.items = items;
        if let Err(e) = self.store.save(&self.items) {
            warn!("failed to persist item collection: {e}");
        }
    }
}
