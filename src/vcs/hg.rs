use crate::error::{BumperError, Result};
use crate::vcs::Vcs;
use std::process::Command;

/// Mercurial backend that shells out to the `hg` executable
pub struct HgVcs;

impl HgVcs {
    pub fn new() -> Self {
        HgVcs
    }
}

impl Default for HgVcs {
    fn default() -> Self {
        Self::new()
    }
}

fn run(arguments: &[&str]) -> Result<()> {
    let status = Command::new("hg")
        .args(arguments)
        .status()
        .map_err(|e| BumperError::vcs(format!("can't run hg: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(BumperError::vcs(format!(
            "hg {} exited with an error",
            arguments.join(" ")
        )))
    }
}

/// Runs hg and returns its stdout, or `None` when the command can't be
/// spawned or exits non-zero.
fn run_and_get_output(arguments: &[&str]) -> Option<String> {
    let output = Command::new("hg").args(arguments).output().ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        None
    }
}

impl Vcs for HgVcs {
    fn name(&self) -> &'static str {
        "hg"
    }

    fn is_usable(&self) -> bool {
        run_and_get_output(&["root"]).is_some()
    }

    fn is_dirty(&self) -> bool {
        let status_output = match run_and_get_output(&["status", "-umard"]) {
            Some(output) => output,
            None => return true,
        };

        status_output
            .lines()
            .any(|line| line.trim_start().starts_with('M'))
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        run(&["ci", "-m", message])
    }

    fn tag(&self, tag_name: &str) -> Result<()> {
        run(&["tag", tag_name, "--message", tag_name])
    }
}
