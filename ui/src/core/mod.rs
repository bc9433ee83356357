//! Cross-view plumbing: embedded file payloads, spreadsheet reflow, layout
//! state, viewport glue, and formatting helpers.

pub mod files;
pub mod format;
pub mod layout;
pub mod spreadsheet;
pub mod viewport;
