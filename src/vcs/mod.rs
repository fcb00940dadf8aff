//! Version control abstraction layer
//!
//! This module provides a trait-based abstraction over the version control
//! actions bumper performs after a successful rewrite: committing the
//! modified files and tagging the release. The concrete implementations
//! include:
//!
//! - [git::GitVcs]: git repositories, using the `git2` crate
//! - [hg::HgVcs]: mercurial repositories, using the `hg` executable
//! - [mock::MockVcs]: an in-memory implementation for testing
//!
//! Callers should depend on the [Vcs] trait and obtain a backend through
//! [detect], which probes each backend's usability in a fixed order rather
//! than asking the user which system is in play.

pub mod git;
pub mod hg;
pub mod mock;

pub use git::GitVcs;
pub use hg::HgVcs;
pub use mock::MockVcs;

use crate::error::Result;

/// The capability set bumper needs from a version control system
pub trait Vcs {
    /// Short backend name for display (e.g., "git")
    fn name(&self) -> &'static str;

    /// Whether the working directory is inside a repository this backend
    /// can operate on
    fn is_usable(&self) -> bool;

    /// Whether the repository has modified files. Probing errors count as
    /// dirty so a broken repository never accepts a commit.
    fn is_dirty(&self) -> bool;

    /// Stage every tracked modification and commit it with the given message
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Create an annotated tag named `tag_name`, with the tag name as the
    /// tag message
    fn tag(&self, tag_name: &str) -> Result<()>;
}

/// Returns the first usable backend, probing git before mercurial, or
/// `None` when the working directory belongs to neither.
pub fn detect() -> Option<Box<dyn Vcs>> {
    let git = GitVcs::new();
    if git.is_usable() {
        return Some(Box::new(git));
    }

    let hg = HgVcs::new();
    if hg.is_usable() {
        return Some(Box::new(hg));
    }

    None
}
