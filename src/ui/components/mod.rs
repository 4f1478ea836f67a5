// UI Components
pub mod browser_pane;
pub mod entry_row;
pub mod login_prompt;
pub mod pane_view;
pub mod scroll_region;
pub mod status_line;
pub mod warning_dialog;

// Re-export components for convenience
pub use browser_pane::{BrowserPane, PaneEvent};
pub use entry_row::{EntryRow, EntryRowView, IconMode, RowSignal};
pub use login_prompt::{LoginPrompt, LoginPromptView, LoginRequest};
pub use pane_view::{content_area, BrowserPaneView};
pub use scroll_region::ScrollRegion;
pub use status_line::StatusLine;
pub use warning_dialog::WarningDialog;
