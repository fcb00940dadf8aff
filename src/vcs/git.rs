use crate::error::Result;
use crate::vcs::Vcs;
use git2::{ObjectType, Repository, Status, StatusOptions};

/// Git backend built on the `git2` crate.
///
/// Holds no repository handle: every operation rediscovers the repository
/// from the working directory.
pub struct GitVcs;

impl GitVcs {
    pub fn new() -> Self {
        GitVcs
    }

    fn open(&self) -> Result<Repository> {
        let repo = Repository::discover(".")?;
        Ok(repo)
    }
}

impl Default for GitVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vcs for GitVcs {
    fn name(&self) -> &'static str {
        "git"
    }

    fn is_usable(&self) -> bool {
        Repository::discover(".").is_ok()
    }

    fn is_dirty(&self) -> bool {
        let repo = match self.open() {
            Ok(repo) => repo,
            Err(_) => return true,
        };

        let mut options = StatusOptions::new();
        options.include_untracked(false);

        let result = match repo.statuses(Some(&mut options)) {
            Ok(statuses) => statuses.iter().any(|entry| {
                entry
                    .status()
                    .intersects(Status::WT_MODIFIED | Status::INDEX_MODIFIED)
            }),
            Err(_) => true,
        };
        result
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        let repo = self.open()?;

        // Stage tracked modifications only, the equivalent of `git add -u`
        let mut index = repo.index()?;
        index.update_all(["*"], None)?;
        index.write()?;

        let tree_oid = index.write_tree()?;
        let tree = repo.find_tree(tree_oid)?;
        let signature = repo.signature()?;
        let parent = repo.head()?.peel_to_commit()?;

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&parent],
        )?;

        Ok(())
    }

    fn tag(&self, tag_name: &str) -> Result<()> {
        let repo = self.open()?;

        let target = repo.head()?.peel(ObjectType::Commit)?;
        let signature = repo.signature()?;

        repo.tag(tag_name, &target, &signature, tag_name, false)?;

        Ok(())
    }
}
