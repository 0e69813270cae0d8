//! # rio-dashboard
//!
//! Widget layout for the tenant dashboard: the persisted widget order,
//! drag placement by pointer offset, and the refresher that re-reads
//! tenant metrics whenever the active tenant changes.

pub mod error;
pub mod layout;
pub mod placement;
pub mod refresher;

pub use error::DashboardError;
pub use layout::{LayoutStore, WidgetLayout};
pub use placement::{Tile, drop_target, place_dragged};
pub use refresher::{DashboardRefresher, DashboardState};
