use std::collections::HashSet;

use crate::host::Workspace;
use crate::types::FileCandidate;

/// One suggestion rule: a glob pattern plus the reason shown to the user
pub struct SuggestionRule {
    /// Glob pattern handed to the workspace search
    pub pattern: &'static str,

    /// Human-readable justification attached to every match
    pub reason: &'static str,
}

/// Maximum matches taken from a single rule
pub const MATCHES_PER_RULE: usize = 20;

/// Dependency cache directories are never suggested
pub const DEPENDENCY_CACHE_GLOB: &str = "**/node_modules/**";

/// Default rule table, in ranking order.
///
/// Order is load-bearing: a file matched by an earlier rule keeps that
/// rule's reason even if a later rule would also match it.
pub const DEFAULT_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        pattern: "**/README*",
        reason: "Project overview and the usual starting point",
    },
    SuggestionRule {
        pattern: "**/package.json",
        reason: "Declares dependencies, scripts, and entry points",
    },
    SuggestionRule {
        pattern: "**/src/main.*",
        reason: "Conventional application entry point",
    },
    SuggestionRule {
        pattern: "**/src/index.*",
        reason: "Conventional module entry point",
    },
    SuggestionRule {
        pattern: "**/src/app.*",
        reason: "Application root component or bootstrap",
    },
    SuggestionRule {
        pattern: "**/*.config.*",
        reason: "Build and tooling configuration",
    },
    SuggestionRule {
        pattern: "**/routes/**",
        reason: "Route definitions map URLs to behavior",
    },
    SuggestionRule {
        pattern: "**/router.*",
        reason: "Router wiring for navigation",
    },
    SuggestionRule {
        pattern: "**/controllers/**",
        reason: "Controllers translate requests into domain calls",
    },
    SuggestionRule {
        pattern: "**/handlers/**",
        reason: "Request handlers and event hooks",
    },
    SuggestionRule {
        pattern: "**/services/**",
        reason: "Service layer with the core business logic",
    },
    SuggestionRule {
        pattern: "**/models/**",
        reason: "Data models and persistence shapes",
    },
];

/// Rank candidate files against an ordered rule table.
///
/// For each rule, in declaration order, query the workspace (bounded per
/// rule, dependency caches excluded) and append any not-yet-seen path with
/// that rule's reason. No matches anywhere is an empty list, not an error.
pub fn rank_suggestions(workspace: &dyn Workspace, rules: &[SuggestionRule]) -> Vec<FileCandidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for rule in rules {
        let matches =
            workspace.find_files(rule.pattern, Some(DEPENDENCY_CACHE_GLOB), MATCHES_PER_RULE);
        if matches.is_empty() {
            log::debug!("Suggestion rule {} matched nothing", rule.pattern);
            continue;
        }
        for path in matches {
            if !seen.insert(path.clone()) {
                continue;
            }
            candidates.push(FileCandidate::new(path, rule.reason));
        }
    }

    log::info!(
        "Ranked {} candidate file(s) from {} rule(s)",
        candidates.len(),
        rules.len()
    );
    candidates
}
