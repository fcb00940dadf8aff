use crate::error::Result;
use crate::vcs::Vcs;
use std::cell::RefCell;

/// Mock VCS for testing orchestration without a real repository
pub struct MockVcs {
    usable: bool,
    dirty: bool,
    commits: RefCell<Vec<String>>,
    tags: RefCell<Vec<String>>,
}

impl MockVcs {
    /// Create a mock with fixed usability and dirtiness probes
    pub fn new(usable: bool, dirty: bool) -> Self {
        MockVcs {
            usable,
            dirty,
            commits: RefCell::new(Vec::new()),
            tags: RefCell::new(Vec::new()),
        }
    }

    /// Commit messages recorded so far
    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }

    /// Tag names recorded so far
    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Vcs for MockVcs {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_usable(&self) -> bool {
        self.usable
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn tag(&self, tag_name: &str) -> Result<()> {
        self.tags.borrow_mut().push(tag_name.to_string());
        Ok(())
    }
}
