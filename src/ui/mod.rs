pub mod app;
pub mod calendar_pane;
pub mod charts;
pub mod command;
pub mod context;
pub mod header;
pub mod kanban;
pub mod settings_pane;
pub mod sidebar;
pub mod stats;
pub mod table;
pub(crate) mod util;
pub mod view;

pub use calendar_pane::MonthPane;
pub use charts::ChartsPane;
pub use context::{Context, Mode, Theme, ThemeMode};
pub use header::Header;
pub use kanban::KanbanBoard;
pub use settings_pane::SettingsPane;
pub use sidebar::Sidebar;
pub use stats::StatsPane;
pub use table::UsersTable;
pub use view::View;
