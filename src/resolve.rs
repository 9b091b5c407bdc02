use crate::config::Mode;
use crate::error::SetError;
use crate::git::VersionSource;
use crate::utils::semver;

/// Derives the version string for `mode`. `tag` is only consulted in release
/// mode; `source` is only queried by the pre-release modes. No side effects.
pub fn resolve(
    mode: Mode,
    tag: Option<&str>,
    source: &dyn VersionSource,
) -> Result<String, SetError> {
    match mode {
        Mode::Release => {
            let tag = tag.ok_or_else(|| {
                SetError::Config(format!(
                    "No tag set for release (pass --tag or export the `{}` environment variable)",
                    crate::config::TAG_ENV
                ))
            })?;
            if !semver::is_version_tag(tag) {
                return Err(SetError::Config(format!(
                    "Unsupported tag for release: {}",
                    tag
                )));
            }
            Ok(tag[1..].to_string())
        }
        Mode::ReleaseCanary | Mode::PrPreview => {
            let latest = source.latest_tag()?;
            if !semver::is_version_tag(&latest) {
                return Err(SetError::Config(format!(
                    "Latest version tag invalid: {}",
                    latest
                )));
            }
            let bumped = semver::bump_patch(&latest[1..]).map_err(SetError::Config)?;
            if mode == Mode::PrPreview {
                let hash = source.commit_hash()?;
                if hash.len() < 8 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(SetError::Command(format!(
                        "Unexpected commit hash from git: '{}'",
                        hash
                    )));
                }
                Ok(format!("{}-pr.{}", bumped, &hash[..8]))
            } else {
                let count = source.commit_count()?;
                Ok(format!("{}-canary.{}", bumped, count))
            }
        }
    }
}
