use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Narrow view of the project manifest (the `package.json` shape).
///
/// Unknown fields are ignored and missing dependency maps default to empty,
/// so a sparse manifest still parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectManifest {
    /// Production dependencies, name to version requirement
    pub dependencies: BTreeMap<String, String>,

    /// Development dependencies, name to version requirement
    pub dev_dependencies: BTreeMap<String, String>,
}

impl ProjectManifest {
    /// Check a dependency name against the union of both maps.
    ///
    /// Versions are irrelevant to detection; only presence counts.
    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Whether the manifest declares any dependencies at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

/// Capabilities the engine needs from its host environment.
///
/// Implementations must degrade instead of failing: a search that finds
/// nothing returns an empty list, a missing path is `false`, and a missing
/// or malformed manifest is `None`. Paths are workspace-relative and
/// `/`-separated; within one snapshot, `find_files` must return the same
/// paths in the same order for the same arguments.
pub trait Workspace {
    /// Find files matching a glob pattern, excluding those matching
    /// `exclude`, silently capped at `limit`.
    fn find_files(&self, pattern: &str, exclude: Option<&str>, limit: usize) -> Vec<String>;

    /// Whether a file exists at the given workspace-relative path
    fn exists(&self, path: &str) -> bool;

    /// Read the project manifest, if one is present and well-formed
    fn read_manifest(&self) -> Option<ProjectManifest>;
}
