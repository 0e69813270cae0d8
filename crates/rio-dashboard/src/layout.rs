//! Persisted widget order.

use std::sync::Arc;

use rio_store::{KeyValueStore, keys};

use crate::error::DashboardError;
use crate::placement::{Tile, place_dragged};

/// An ordered list of widget-type ids. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetLayout {
    widgets: Vec<String>,
}

impl WidgetLayout {
    #[must_use]
    pub const fn new(widgets: Vec<String>) -> Self {
        Self { widgets }
    }

    #[must_use]
    pub fn widgets(&self) -> &[String] {
        &self.widgets
    }

    #[must_use]
    pub fn into_widgets(self) -> Vec<String> {
        self.widgets
    }

    pub fn add(&mut self, widget: impl Into<String>) {
        self.widgets.push(widget.into());
    }

    /// # Errors
    ///
    /// Returns `DashboardError::IndexOutOfRange` past the end.
    pub fn remove(&mut self, index: usize) -> Result<String, DashboardError> {
        self.check_index(index)?;
        Ok(self.widgets.remove(index))
    }

    /// Drag the widget at `index` and drop it at `pointer_y`, with tiles
    /// laid out top to bottom at `tile_height`.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::IndexOutOfRange` past the end.
    pub fn move_widget(
        &mut self,
        index: usize,
        pointer_y: f64,
        tile_height: f64,
    ) -> Result<(), DashboardError> {
        self.check_index(index)?;
        let dragged = self.widgets.remove(index);
        let tiles = Tile::stacked(&self.widgets, tile_height);
        self.widgets = place_dragged(&tiles, &dragged, pointer_y);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), DashboardError> {
        if index < self.widgets.len() {
            Ok(())
        } else {
            Err(DashboardError::IndexOutOfRange {
                index,
                len: self.widgets.len(),
            })
        }
    }
}

/// Reads and writes the widget order under `dashboardWidgets`.
#[derive(Clone)]
pub struct LayoutStore {
    store: Arc<dyn KeyValueStore>,
    defaults: Vec<String>,
}

impl LayoutStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            defaults: Vec::new(),
        }
    }

    /// Layout to fall back on when nothing usable is stored.
    #[must_use]
    pub fn with_defaults(mut self, defaults: Vec<String>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Overwrite the stored order.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Store` if the write fails.
    pub fn save_layout(&self, order: &[String]) -> Result<(), DashboardError> {
        let json = serde_json::to_string(order)?;
        self.store.set(keys::DASHBOARD_WIDGETS, &json)?;
        tracing::debug!(count = order.len(), "dashboard layout saved");
        Ok(())
    }

    /// The stored order. Absent, unreadable, or corrupt data reads as empty.
    #[must_use]
    pub fn load_layout(&self) -> Vec<String> {
        let raw = match self.store.get(keys::DASHBOARD_WIDGETS) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "could not read dashboard layout");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring corrupt dashboard layout");
            Vec::new()
        })
    }

    /// The stored layout, or the defaults when none is stored.
    #[must_use]
    pub fn current(&self) -> WidgetLayout {
        let stored = self.load_layout();
        if stored.is_empty() {
            WidgetLayout::new(self.defaults.clone())
        } else {
            WidgetLayout::new(stored)
        }
    }

    /// Forget the stored order so the defaults apply again.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Store` if the write fails.
    pub fn reset(&self) -> Result<WidgetLayout, DashboardError> {
        self.store.remove(keys::DASHBOARD_WIDGETS)?;
        tracing::info!("dashboard layout reset");
        Ok(WidgetLayout::new(self.defaults.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rio_store::MemoryStore;

    use super::*;

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    fn store_with(raw: &str) -> LayoutStore {
        LayoutStore::new(Arc::new(MemoryStore::with_entries([(
            keys::DASHBOARD_WIDGETS,
            raw,
        )])))
    }

    #[test]
    fn save_then_load_round_trips_with_duplicates() {
        let layout = LayoutStore::new(Arc::new(MemoryStore::new()));
        let order = owned(&["task-status", "compliance-trend", "task-status"]);
        layout.save_layout(&order).unwrap();
        assert_eq!(layout.load_layout(), order);
    }

    #[test]
    fn nothing_stored_loads_empty() {
        let layout = LayoutStore::new(Arc::new(MemoryStore::new()));
        assert!(layout.load_layout().is_empty());
    }

    #[test]
    fn corrupt_values_load_empty() {
        for raw in ["{not json", "{\"a\":1}", "[1,2,3]", ""] {
            assert!(store_with(raw).load_layout().is_empty(), "{raw}");
        }
    }

    #[test]
    fn current_falls_back_to_defaults() {
        let layout = store_with("garbage").with_defaults(owned(&["recent-activity"]));
        assert_eq!(layout.current().widgets(), owned(&["recent-activity"]));
    }

    #[test]
    fn reset_removes_stored_order() {
        let layout = LayoutStore::new(Arc::new(MemoryStore::new()))
            .with_defaults(owned(&["task-status"]));
        layout.save_layout(&owned(&["compliance-trend"])).unwrap();
        let after = layout.reset().unwrap();
        assert_eq!(after.widgets(), owned(&["task-status"]));
        assert!(layout.load_layout().is_empty());
    }

    #[test]
    fn move_widget_reorders_by_pointer() {
        let mut layout = WidgetLayout::new(owned(&["a", "b", "c", "d"]));
        // remaining tiles b, c, d at centers 50, 150, 250
        layout.move_widget(0, 120.0, 100.0).unwrap();
        assert_eq!(layout.widgets(), owned(&["b", "a", "c", "d"]));

        layout.move_widget(0, 10_000.0, 100.0).unwrap();
        assert_eq!(layout.widgets(), owned(&["a", "c", "d", "b"]));
    }

    #[test]
    fn edits_reject_out_of_range_indices() {
        let mut layout = WidgetLayout::new(owned(&["a"]));
        assert!(matches!(
            layout.remove(3),
            Err(DashboardError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert!(layout.move_widget(1, 0.0, 100.0).is_err());
        layout.add("b");
        assert_eq!(layout.remove(0).unwrap(), "a");
        assert_eq!(layout.widgets(), owned(&["b"]));
    }
}
