use crate::error::{BumperError, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};

/// One replaced line: its 1-based number and the full line text before and
/// after substitution, without any line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    pub line: usize,
    pub before: String,
    pub after: String,
}

/// Result of processing one file, with diff entries in ascending line order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub file: PathBuf,
    pub diffs: Vec<LineDiff>,
}

impl ReplaceOutcome {
    /// Whether any line actually changed. A line can match the pattern and
    /// still be replaced with identical text; that is not a change.
    pub fn has_changes(&self) -> bool {
        self.diffs.iter().any(|diff| diff.before != diff.after)
    }
}

/// Build the search pattern for a version template
///
/// Every `{{version}}` occurrence in `template` is substituted with the
/// regex-escaped `current_version` text and the result is compiled.
///
/// # Returns
/// * `Ok(None)` - if either input is empty; the caller must treat the rule
///   as invalid rather than match everything
/// * `Ok(Some(Regex))` - compiled pattern
/// * `Err(BumperError::InvalidRule)` - if the substituted template is not a
///   valid pattern
pub fn build_pattern(template: &str, current_version: &str) -> Result<Option<Regex>> {
    if template.is_empty() || current_version.is_empty() {
        return Ok(None);
    }

    let escaped = regex::escape(current_version);
    let source = template.replace("{{version}}", &escaped);

    let pattern = Regex::new(&source).map_err(|e| {
        BumperError::invalid_rule(format!("can't compile pattern '{}': {}", source, e))
    })?;

    Ok(Some(pattern))
}

/// Compute the sparse line diff for a replacement
///
/// Scans lines in file order. A line is included if the pattern matches
/// anywhere in it; `after` has every occurrence on that line substituted by
/// `replacement`. The replacement text is taken literally, `$` included.
/// Lines without a match are omitted.
pub fn compute_diff(lines: &[String], pattern: &Regex, replacement: &str) -> Vec<LineDiff> {
    let mut diffs = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if pattern.is_match(line) {
            diffs.push(LineDiff {
                line: index + 1,
                before: line.clone(),
                after: pattern.replace_all(line, NoExpand(replacement)).into_owned(),
            });
        }
    }

    diffs
}

/// Replace content in one file
///
/// Reads the whole file, computes the line diff, and unless `dry_run` is
/// set rewrites the changed lines back using the file's original
/// line-ending convention. An empty diff never writes. The dry-run path
/// returns the exact outcome the real path would, so callers can report
/// both modes identically.
///
/// # Arguments
/// * `file` - path to the target file
/// * `pattern` - search pattern, matched per line
/// * `replacement` - literal replacement text (empty string is legal)
/// * `dry_run` - compute and report only, never write
///
/// # Returns
/// * `Ok(ReplaceOutcome)` - file path plus diff entries
/// * `Err` - `InvalidRule`, `FileNotFound`, `NotAFile`, `ReadFailure` or
///   `WriteFailure`, each distinct so callers can tell "nothing to do"
///   from "tried and failed"
pub fn replace_in_file(
    file: &Path,
    pattern: &Regex,
    replacement: &str,
    dry_run: bool,
) -> Result<ReplaceOutcome> {
    if file.as_os_str().is_empty() {
        return Err(BumperError::invalid_rule("the rule has an empty file path"));
    }

    let metadata =
        fs::metadata(file).map_err(|_| BumperError::FileNotFound(file.display().to_string()))?;

    if !metadata.is_file() {
        return Err(BumperError::NotAFile(file.display().to_string()));
    }

    let content = fs::read_to_string(file).map_err(|source| BumperError::ReadFailure {
        file: file.display().to_string(),
        source,
    })?;

    let uses_crlf = content.contains("\r\n");
    let mut lines = split_lines(&content);

    let diffs = compute_diff(&lines, pattern, replacement);

    if !dry_run && !diffs.is_empty() {
        for diff in &diffs {
            lines[diff.line - 1] = diff.after.clone();
        }

        let joined = lines.join(if uses_crlf { "\r\n" } else { "\n" });

        fs::write(file, joined).map_err(|source| BumperError::WriteFailure {
            file: file.display().to_string(),
            source,
        })?;
    }

    Ok(ReplaceOutcome {
        file: file.to_path_buf(),
        diffs,
    })
}

/// Split on `\n` or `\r\n`. A trailing newline leaves a final empty
/// element, so rejoining reproduces it.
fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
