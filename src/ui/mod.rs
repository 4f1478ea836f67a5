// UI Layer
pub mod components;
pub mod theme;

pub use components::{BrowserPane, BrowserPaneView, IconMode, PaneEvent, StatusLine};
pub use theme::{Theme, ThemeManager};
