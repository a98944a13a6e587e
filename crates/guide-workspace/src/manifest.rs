use std::fs;
use std::path::Path;

use guide_engine::ProjectManifest;

/// Manifest file probed at the workspace root
pub const MANIFEST_FILE: &str = "package.json";

/// Read and parse the project manifest.
///
/// Missing or malformed input yields `None`, never an error; framework
/// detection falls through to its config-file heuristics in that case.
#[must_use]
pub fn read_manifest(root: &Path) -> Option<ProjectManifest> {
    let path = root.join(MANIFEST_FILE);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            log::debug!("No readable manifest at {}: {err}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(manifest) => Some(manifest),
        Err(err) => {
            log::warn!("Malformed manifest at {}: {err}", path.display());
            None
        }
    }
}
