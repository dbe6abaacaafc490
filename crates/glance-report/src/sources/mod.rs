//! Built-in state sub-queries.
//!
//! Each source exposes a `title`, optionally an `accent`, and a
//! `gather` that shells out to git and returns raw text for the
//! section body. Their formatting is git's own; the composer only
//! decides placement and density.

pub mod branches;
pub mod log;
pub mod reflog;
pub mod stashes;
pub mod status;

#[cfg(test)]
pub(crate) mod testutil;
