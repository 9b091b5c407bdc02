use crate::error::SetError;

/// Environment variable carrying the CI mode when no flag is passed.
pub const MODE_ENV: &str = "mode";
/// Environment variable carrying the release tag when no flag is passed.
pub const TAG_ENV: &str = "tag";

/// CI mode selecting the version derivation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Version comes from an externally supplied `vX.Y.Z` tag.
    Release,
    /// Patch bump of the latest version tag, suffixed with the commit count.
    ReleaseCanary,
    /// Patch bump of the latest version tag, suffixed with a short commit hash.
    PrPreview,
}

impl Mode {
    pub fn parse(raw: &str) -> Result<Self, SetError> {
        match raw {
            "release" => Ok(Mode::Release),
            "releaseCanary" => Ok(Mode::ReleaseCanary),
            "prPreview" => Ok(Mode::PrPreview),
            other => Err(SetError::Config(format!("Unsupported mode: {}", other))),
        }
    }
}

/// Flag value first, then the environment, so CI can export `mode`/`tag`
/// while local runs pass flags. Blank values count as unset.
pub fn flag_or_env(flag: Option<String>, var: &str) -> Option<String> {
    if let Some(v) = flag {
        if !v.trim().is_empty() {
            return Some(v);
        }
    }
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

pub fn resolve_mode(flag: Option<String>) -> Result<Mode, SetError> {
    let raw = flag_or_env(flag, MODE_ENV).ok_or_else(|| {
        SetError::Config(format!(
            "No mode set (pass --mode or export the `{}` environment variable)",
            MODE_ENV
        ))
    })?;
    Mode::parse(&raw)
}
