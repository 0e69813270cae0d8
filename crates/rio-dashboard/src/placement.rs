//! Drag placement of widget tiles.
//!
//! For each tile the offset is `pointer_y - center_y`. The drop target is
//! the tile with the largest negative offset, i.e. the closest tile whose
//! center lies below the pointer. The dragged widget goes in front of it,
//! or at the end when the pointer is below every center.

/// A rendered widget tile and its vertical center.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub widget: String,
    pub center_y: f64,
}

impl Tile {
    /// Tiles for `widgets` stacked top to bottom at a fixed height.
    #[must_use]
    pub fn stacked(widgets: &[String], tile_height: f64) -> Vec<Self> {
        let mut top = 0.0;
        widgets
            .iter()
            .map(|widget| {
                let tile = Self {
                    widget: widget.clone(),
                    center_y: tile_height.mul_add(0.5, top),
                };
                top += tile_height;
                tile
            })
            .collect()
    }
}

/// Index of the tile the dragged widget should be inserted before.
#[must_use]
pub fn drop_target(tiles: &[Tile], pointer_y: f64) -> Option<usize> {
    let mut closest: Option<(usize, f64)> = None;
    for (index, tile) in tiles.iter().enumerate() {
        let offset = pointer_y - tile.center_y;
        // strict comparison: on a tie the first tile stays
        if offset < 0.0 && closest.is_none_or(|(_, best)| offset > best) {
            closest = Some((index, offset));
        }
    }
    closest.map(|(index, _)| index)
}

/// The widget order after dropping `dragged` at `pointer_y`.
///
/// `tiles` are the remaining tiles, without the one being dragged.
#[must_use]
pub fn place_dragged(tiles: &[Tile], dragged: &str, pointer_y: f64) -> Vec<String> {
    let mut order: Vec<String> = tiles.iter().map(|t| t.widget.clone()).collect();
    let at = drop_target(tiles, pointer_y).unwrap_or(order.len());
    order.insert(at, dragged.to_string());
    order
}
