use crate::error::SetError;
use std::process::Command;

/// Read-only view of the repository state the derivation strategies need.
/// Abstracted so `resolve` is testable without a real repository.
pub trait VersionSource {
    /// Most recent annotated tag matching `v*`.
    fn latest_tag(&self) -> Result<String, SetError>;
    /// Number of commits reachable from HEAD.
    fn commit_count(&self) -> Result<u64, SetError>;
    /// Full hash of the current commit.
    fn commit_hash(&self) -> Result<String, SetError>;
}

/// `VersionSource` backed by the local `git` binary.
pub struct GitVersionSource;

impl GitVersionSource {
    pub fn new() -> Self {
        GitVersionSource
    }

    // Located per call so release mode never requires git on PATH.
    fn run(&self, args: &[&str]) -> Result<String, SetError> {
        let git = which::which("git")
            .map_err(|e| SetError::Command(format!("git not found on PATH: {}", e)))?;
        let output = Command::new(git)
            .args(args)
            .output()
            .map_err(|e| SetError::Command(format!("Failed to run git {}: {}", args.join(" "), e)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SetError::Command(format!(
                "git {} failed (exit={}): {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl VersionSource for GitVersionSource {
    fn latest_tag(&self) -> Result<String, SetError> {
        self.run(&["describe", "--abbrev=0", "--match", "v*"])
    }

    fn commit_count(&self) -> Result<u64, SetError> {
        let raw = self.run(&["rev-list", "--count", "HEAD"])?;
        parse_commit_count(&raw)
    }

    fn commit_hash(&self) -> Result<String, SetError> {
        self.run(&["rev-parse", "HEAD"])
    }
}

/// `git rev-list --count` output must be a bare non-negative integer;
/// anything else fails the run before a version is assembled.
fn parse_commit_count(raw: &str) -> Result<u64, SetError> {
    raw.parse()
        .map_err(|_| SetError::Command(format!("Unexpected commit count from git: '{}'", raw)))
}
