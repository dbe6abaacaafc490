//! Terminal plumbing for glance.
//!
//! Color-mode resolution, TTY and terminal-size detection, and pager
//! routing for report output.

pub mod pager;
pub mod styles;
pub mod terminal;
