// Utilities
pub mod error;
pub mod formatter;
pub mod text_edit;
