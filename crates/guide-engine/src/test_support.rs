//! In-memory workspace fake shared by the engine's unit tests.

use std::collections::BTreeMap;

use globset::{GlobBuilder, GlobMatcher};

use crate::host::{ProjectManifest, Workspace};

/// A fixed in-memory project: an ordered list of relative paths plus an
/// optional manifest.
#[derive(Default)]
pub(crate) struct FakeWorkspace {
    files: Vec<String>,
    manifest: Option<ProjectManifest>,
}

impl FakeWorkspace {
    pub(crate) fn with_files(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(|f| f.to_string()).collect(),
            manifest: None,
        }
    }

    pub(crate) fn manifest(mut self, dependencies: &[&str], dev_dependencies: &[&str]) -> Self {
        let to_map = |names: &[&str]| -> BTreeMap<String, String> {
            names
                .iter()
                .map(|name| (name.to_string(), "1.0.0".to_string()))
                .collect()
        };
        self.manifest = Some(ProjectManifest {
            dependencies: to_map(dependencies),
            dev_dependencies: to_map(dev_dependencies),
        });
        self
    }
}

impl Workspace for FakeWorkspace {
    fn find_files(&self, pattern: &str, exclude: Option<&str>, limit: usize) -> Vec<String> {
        let matcher = compile(pattern);
        let excluder = exclude.map(compile);

        self.files
            .iter()
            .filter(|path| matcher.is_match(path))
            .filter(|path| !excluder.as_ref().is_some_and(|glob| glob.is_match(path)))
            .take(limit)
            .cloned()
            .collect()
    }

    fn exists(&self, path: &str) -> bool {
        self.files.iter().any(|file| file == path)
    }

    fn read_manifest(&self) -> Option<ProjectManifest> {
        self.manifest.clone()
    }
}

fn compile(pattern: &str) -> GlobMatcher {
    GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(false)
        .build()
        .expect("valid test glob")
        .compile_matcher()
}
