pub mod glyph;
pub mod keymap;
pub mod orientation;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
