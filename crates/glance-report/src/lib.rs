//! Report composition for glance.
//!
//! A report is a sequence of named sections: the built-in git
//! sub-queries (status, log, reflog, branches, stashes) plus any
//! user-configured extension commands. Sections are rendered in a
//! compact or pretty density, reordered by preference, concatenated,
//! and routed to stdout or a pager depending on terminal height.

pub mod compose;
pub mod extensions;
pub mod options;
pub mod section;
pub mod sources;
