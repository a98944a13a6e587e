use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use once_cell::unsync::OnceCell;

use guide_engine::{ProjectManifest, Workspace};

use crate::manifest;

/// Filesystem-backed workspace rooted at a project directory.
///
/// The file listing is walked once per workspace instance (gitignore-aware,
/// hidden files skipped, sorted by path) and treated as an immutable
/// snapshot; create a new instance to observe filesystem changes. The
/// `exists` probe goes to the real filesystem so import resolution also
/// sees files the walk filters out.
pub struct ProjectWorkspace {
    root: PathBuf,
    snapshot: OnceCell<Vec<String>>,
}

impl ProjectWorkspace {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            snapshot: OnceCell::new(),
        }
    }

    /// The project directory this workspace is rooted at
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn snapshot(&self) -> &[String] {
        self.snapshot.get_or_init(|| self.walk_relative())
    }

    /// Walk the project tree in sorted order, yielding workspace-relative
    /// `/`-separated paths
    fn walk_relative(&self) -> Vec<String> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            // Honor .gitignore files even when the tree is not a git repo.
            .require_git(false)
            .sort_by_file_path(|a, b| a.cmp(b));

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }
                    if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                        files.push(relative.to_string_lossy().replace('\\', "/"));
                    }
                }
                Err(err) => log::warn!("Failed to read entry: {err}"),
            }
        }

        log::info!("Workspace snapshot holds {} file(s)", files.len());
        files
    }
}

fn compile_glob(pattern: &str) -> Option<GlobMatcher> {
    match GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(false)
        .build()
    {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(err) => {
            log::warn!("Ignoring invalid glob {pattern}: {err}");
            None
        }
    }
}

impl Workspace for ProjectWorkspace {
    fn find_files(&self, pattern: &str, exclude: Option<&str>, limit: usize) -> Vec<String> {
        let Some(matcher) = compile_glob(pattern) else {
            return Vec::new();
        };
        let excluder = exclude.and_then(compile_glob);

        let mut matches = Vec::new();
        for path in self.snapshot() {
            if matches.len() >= limit {
                break;
            }
            if !matcher.is_match(path) {
                continue;
            }
            if excluder.as_ref().is_some_and(|glob| glob.is_match(path)) {
                continue;
            }
            matches.push(path.clone());
        }

        log::debug!("{pattern} matched {} file(s)", matches.len());
        matches
    }

    fn exists(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }

    fn read_manifest(&self) -> Option<ProjectManifest> {
        manifest::read_manifest(&self.root)
    }
}
