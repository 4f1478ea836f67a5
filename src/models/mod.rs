// Data Models
pub mod browse;
pub mod fs_entry;
pub mod selection;

pub use browse::{BrowseMode, LayoutDensity, ViewType};
pub use fs_entry::{EntryKind, FsEntry};
pub use selection::SelectionGroup;
