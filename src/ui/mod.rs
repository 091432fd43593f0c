pub mod passage;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use passage::{PassageLayout, PassageRenderer, Piece};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
pub use view::{render_help_line, render_progress_bar, render_status_line};
