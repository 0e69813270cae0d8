use clap::{Args, Subcommand};

/// Dashboard layout commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LayoutCommands {
    /// Show the current widget order.
    Show,
    /// Replace the widget order.
    Save(LayoutSaveArgs),
    /// Append a widget.
    Add(LayoutWidgetArgs),
    /// Remove the widget at a position.
    Remove(LayoutIndexArgs),
    /// Drag the widget at a position and drop it at a pointer height.
    Place(LayoutPlaceArgs),
    /// Forget the saved order and use the configured default.
    Reset,
}

#[derive(Clone, Debug, Args)]
pub struct LayoutSaveArgs {
    /// Widget ids, top to bottom.
    #[arg(required = true)]
    pub widgets: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LayoutWidgetArgs {
    /// Widget id.
    pub widget: String,
}

#[derive(Clone, Debug, Args)]
pub struct LayoutIndexArgs {
    /// Zero-based position.
    pub index: usize,
}

#[derive(Clone, Debug, Args)]
pub struct LayoutPlaceArgs {
    /// Zero-based position of the dragged widget.
    pub index: usize,
    /// Pointer height in the same units as dashboard.tile_height.
    #[arg(allow_negative_numbers = true)]
    pub pointer_y: f64,
}
