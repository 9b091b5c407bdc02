use crate::error::SetError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Rewrites the `version` field of the manifest at `path`. The file is read
/// in full, mutated in one field and rewritten compactly in place; no backup
/// is kept. Callers only reach this after the version is fully derived, so a
/// failed run never leaves a partial write behind.
pub fn set_version(path: &Path, version: &str) -> Result<(), SetError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SetError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let mut doc: Value = serde_json::from_str(&contents)
        .map_err(|e| SetError::Config(format!("{} is not valid JSON: {}", path.display(), e)))?;

    let obj = doc
        .as_object_mut()
        .ok_or_else(|| SetError::Config(format!("{} is not a JSON object", path.display())))?;
    obj.insert("version".to_string(), Value::String(version.to_string()));

    let serialized = serde_json::to_string(&doc)
        .map_err(|e| SetError::Io(format!("Failed to serialize {}: {}", path.display(), e)))?;
    fs::write(path, serialized)
        .map_err(|e| SetError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}
