use serde::{Deserialize, Serialize};

use crate::host::Workspace;
use crate::ranker::DEPENDENCY_CACHE_GLOB;

/// A detectable framework family.
///
/// Variant order is the canonical scan order shared by detection and the
/// walkthrough builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Framework {
    NextJs,
    React,
    Vite,
    Vue,
    Angular,
    Svelte,
    Nuxt,
    Astro,
    NestJs,
    Express,
    Fastify,
}

impl Framework {
    /// Canonical display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NextJs => "Next.js",
            Self::React => "React",
            Self::Vite => "Vite",
            Self::Vue => "Vue",
            Self::Angular => "Angular",
            Self::Svelte => "Svelte",
            Self::Nuxt => "Nuxt",
            Self::Astro => "Astro",
            Self::NestJs => "NestJS",
            Self::Express => "Express",
            Self::Fastify => "Fastify",
        }
    }
}

/// Detection rule: manifest dependency names plus an optional config-file
/// glob fallback
struct FrameworkRule {
    framework: Framework,
    dependencies: &'static [&'static str],
    config_glob: Option<&'static str>,
}

/// Fixed detection table, in canonical scan order
const FRAMEWORK_RULES: &[FrameworkRule] = &[
    FrameworkRule {
        framework: Framework::NextJs,
        dependencies: &["next"],
        config_glob: Some("**/next.config.*"),
    },
    FrameworkRule {
        framework: Framework::React,
        dependencies: &["react"],
        config_glob: None,
    },
    FrameworkRule {
        framework: Framework::Vite,
        dependencies: &["vite"],
        config_glob: Some("**/vite.config.*"),
    },
    FrameworkRule {
        framework: Framework::Vue,
        dependencies: &["vue"],
        config_glob: None,
    },
    FrameworkRule {
        framework: Framework::Angular,
        dependencies: &["@angular/core"],
        config_glob: Some("**/angular.json"),
    },
    FrameworkRule {
        framework: Framework::Svelte,
        dependencies: &["svelte", "@sveltejs/kit"],
        config_glob: Some("**/svelte.config.*"),
    },
    FrameworkRule {
        framework: Framework::Nuxt,
        dependencies: &["nuxt"],
        config_glob: Some("**/nuxt.config.*"),
    },
    FrameworkRule {
        framework: Framework::Astro,
        dependencies: &["astro"],
        config_glob: Some("**/astro.config.*"),
    },
    FrameworkRule {
        framework: Framework::NestJs,
        dependencies: &["@nestjs/core"],
        config_glob: Some("**/nest-cli.json"),
    },
    FrameworkRule {
        framework: Framework::Express,
        dependencies: &["express"],
        config_glob: None,
    },
    FrameworkRule {
        framework: Framework::Fastify,
        dependencies: &["fastify"],
        config_glob: None,
    },
];

/// Detect framework families for the workspace.
///
/// Primary signal: dependency names (any version) in the union of the
/// manifest's production and development maps. When the manifest is absent,
/// malformed, or names no known framework, fall back to probing for
/// canonical config files. Detection never fails; inconclusive evidence
/// yields an empty set.
pub fn detect_frameworks(workspace: &dyn Workspace) -> Vec<Framework> {
    if let Some(manifest) = workspace.read_manifest() {
        let detected: Vec<Framework> = FRAMEWORK_RULES
            .iter()
            .filter(|rule| rule.dependencies.iter().any(|name| manifest.has_dependency(name)))
            .map(|rule| rule.framework)
            .collect();
        if !detected.is_empty() {
            log::info!("Detected {} framework(s) from the manifest", detected.len());
            return detected;
        }
        log::debug!("Manifest names no known framework; probing config files");
    } else {
        log::debug!("No readable manifest; probing config files");
    }

    let detected: Vec<Framework> = FRAMEWORK_RULES
        .iter()
        .filter(|rule| {
            rule.config_glob.is_some_and(|glob| {
                !workspace
                    .find_files(glob, Some(DEPENDENCY_CACHE_GLOB), 1)
                    .is_empty()
            })
        })
        .map(|rule| rule.framework)
        .collect();

    if detected.is_empty() {
        log::info!("No framework evidence found");
    } else {
        log::info!("Detected {} framework(s) from config files", detected.len());
    }
    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeWorkspace;
    use pretty_assertions::assert_eq;

    #[test]
    fn manifest_dependencies_win() {
        let workspace = FakeWorkspace::with_files(&["vite.config.ts"])
            .manifest(&["next", "react"], &[]);

        let detected = detect_frameworks(&workspace);

        // Manifest evidence short-circuits the config probe entirely.
        assert_eq!(detected, vec![Framework::NextJs, Framework::React]);
    }

    #[test]
    fn dev_dependencies_count() {
        let workspace = FakeWorkspace::with_files(&[]).manifest(&[], &["vite"]);
        assert_eq!(detect_frameworks(&workspace), vec![Framework::Vite]);
    }

    #[test]
    fn canonical_order_is_independent_of_manifest_order() {
        let workspace =
            FakeWorkspace::with_files(&[]).manifest(&["fastify", "@nestjs/core"], &[]);
        assert_eq!(
            detect_frameworks(&workspace),
            vec![Framework::NestJs, Framework::Fastify]
        );
    }

    #[test]
    fn either_svelte_package_detects_svelte() {
        let workspace = FakeWorkspace::with_files(&[]).manifest(&["@sveltejs/kit"], &[]);
        assert_eq!(detect_frameworks(&workspace), vec![Framework::Svelte]);
    }

    #[test]
    fn config_fallback_when_manifest_is_missing() {
        let workspace =
            FakeWorkspace::with_files(&["apps/web/vite.config.ts", "angular.json"]);
        assert_eq!(
            detect_frameworks(&workspace),
            vec![Framework::Vite, Framework::Angular]
        );
    }

    #[test]
    fn config_fallback_when_manifest_names_nothing_known() {
        let workspace =
            FakeWorkspace::with_files(&["next.config.mjs"]).manifest(&["lodash"], &[]);
        assert_eq!(detect_frameworks(&workspace), vec![Framework::NextJs]);
    }

    #[test]
    fn no_evidence_yields_empty_set() {
        let workspace = FakeWorkspace::with_files(&["src/lib.rs", "Cargo.toml"]);
        assert!(detect_frameworks(&workspace).is_empty());
    }
}
