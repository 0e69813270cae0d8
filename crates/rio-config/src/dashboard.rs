//! Dashboard layout configuration.

use serde::{Deserialize, Serialize};

const fn default_tile_height() -> f64 {
    120.0
}

fn default_widgets() -> Vec<String> {
    ["compliance-trend", "task-status", "upcoming-deadlines", "recent-activity"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Height of one widget tile, used to derive tile centers for placement.
    #[serde(default = "default_tile_height")]
    pub tile_height: f64,

    /// Layout shown when nothing has been saved yet.
    #[serde(default = "default_widgets")]
    pub default_widgets: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tile_height: default_tile_height(),
            default_widgets: default_widgets(),
        }
    }
}
