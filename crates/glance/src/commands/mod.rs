//! Command handlers for the `glance` CLI.

pub mod changes;
pub mod completion;
pub mod settings;
pub mod state;
pub mod upstream;
