use rio_dashboard::WidgetLayout;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LayoutCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LayoutResponse<'a> {
    widgets: &'a [String],
    saved: bool,
}

pub fn handle(action: &LayoutCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = &ctx.layout;
    match action {
        LayoutCommands::Show => {
            let saved = !store.load_layout().is_empty();
            respond(&store.current(), saved, flags)
        }
        LayoutCommands::Save(args) => {
            store.save_layout(&args.widgets)?;
            respond(&WidgetLayout::new(args.widgets.clone()), true, flags)
        }
        LayoutCommands::Add(args) => {
            let mut layout = store.current();
            layout.add(args.widget.clone());
            store.save_layout(layout.widgets())?;
            respond(&layout, true, flags)
        }
        LayoutCommands::Remove(args) => {
            let mut layout = store.current();
            let removed = layout.remove(args.index)?;
            tracing::debug!(widget = %removed, index = args.index, "widget removed");
            store.save_layout(layout.widgets())?;
            respond(&layout, true, flags)
        }
        LayoutCommands::Place(args) => {
            let mut layout = store.current();
            layout.move_widget(args.index, args.pointer_y, ctx.config.dashboard.tile_height)?;
            store.save_layout(layout.widgets())?;
            respond(&layout, true, flags)
        }
        LayoutCommands::Reset => {
            let layout = store.reset()?;
            respond(&layout, false, flags)
        }
    }
}

fn respond(layout: &WidgetLayout, saved: bool, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &LayoutResponse {
            widgets: layout.widgets(),
            saved,
        },
        flags.format,
    )
}
