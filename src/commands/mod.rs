//! Command implementations

pub mod apply;
pub mod completions;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod version;
