use regex::Regex;
use std::sync::LazyLock;

static VERSION_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^v\d+\.\d+\.\d+$").unwrap());
static VERSION_TRIPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)").unwrap());

/// Checks the tag shape the CI pipeline produces: `v<major>.<minor>.<patch>`,
/// no pre-release or build metadata.
pub fn is_version_tag(tag: &str) -> bool {
    VERSION_TAG.is_match(tag)
}

/// Bumps the patch component of an `x.y.z` version, dropping any pre-release
/// suffix carried by the input.
pub fn bump_patch(version: &str) -> Result<String, String> {
    let caps = VERSION_TRIPLE
        .captures(version)
        .ok_or_else(|| format!("Error calculating version from '{}'", version))?;
    let patch: u64 = caps[3]
        .parse()
        .map_err(|_| format!("Patch component out of range in '{}'", version))?;
    Ok(format!(
        "{}.{}.{}",
        &caps[1],
        &caps[2],
        patch.saturating_add(1)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_version_tags() {
        for tag in ["v0.0.0", "v1.2.3", "v10.20.30"] {
            assert!(is_version_tag(tag), "{} should match", tag);
        }
    }

    #[test]
    fn rejects_non_version_tags() {
        for tag in ["1.2.3", "v1.2", "v1.2.3-rc.1", "v1.2.3.4", "version", ""] {
            assert!(!is_version_tag(tag), "{} should not match", tag);
        }
    }

    #[test]
    fn bumps_patch_only() {
        assert_eq!(bump_patch("1.0.3").unwrap(), "1.0.4");
        assert_eq!(bump_patch("0.0.0").unwrap(), "0.0.1");
        assert_eq!(bump_patch("2.9.19").unwrap(), "2.9.20");
    }

    #[test]
    fn drops_existing_suffix() {
        assert_eq!(bump_patch("1.0.3-canary.7").unwrap(), "1.0.4");
        assert_eq!(bump_patch("1.0.3-pr.abcdef12").unwrap(), "1.0.4");
    }

    #[test]
    fn errors_on_unparseable_triple() {
        assert!(bump_patch("not-a-version").is_err());
        assert!(bump_patch("1.2").is_err());
        assert!(bump_patch("").is_err());
    }
}
