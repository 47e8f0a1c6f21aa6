//! Presentation layer with screens, navigation and event handling.

/// Event handling.
pub mod events;
/// Route stack between screens.
pub mod navigation;
/// Shared colors.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
