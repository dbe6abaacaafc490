//! Git integration for glance.
//!
//! This crate provides the subprocess wrappers used to run `git`
//! argument vectors and a handful of read-only repository queries built
//! on top of them. Nothing here mutates a repository.

pub mod exec;
pub mod query;
