use std::collections::HashSet;

use crate::host::Workspace;
use crate::patterns;
use crate::types::{FileCandidate, NextSuggestion, WalkthroughStep};

/// Maximum combined entries across all tiers
pub const MAX_NEXT: usize = 6;

/// Extension resolution order for relative imports: the bare specifier
/// first, then source extensions
const EXTENSION_ORDER: &[&str] = &["", ".ts", ".tsx", ".js", ".jsx"];

/// Directory index fallbacks, tried after the plain extensions
const INDEX_ORDER: &[&str] = &["/index.ts", "/index.tsx", "/index.js", "/index.jsx"];

/// Compute the bounded "explore next" list for the current file.
///
/// Three signal tiers in strict priority order — relative imports of the
/// current file, the walkthrough step after the current file's step, then
/// unexplored ranked suggestions — all writing into one shared
/// deduplication set keyed by path, seeded with the current file so it is
/// never suggested to itself.
pub fn resolve_next(
    workspace: &dyn Workspace,
    current_path: &str,
    current_lines: &[String],
    suggestions: &[FileCandidate],
    walkthrough: &[WalkthroughStep],
    learned: &HashSet<String>,
) -> Vec<NextSuggestion> {
    let mut collected: HashSet<String> = HashSet::new();
    collected.insert(current_path.to_string());
    let mut results: Vec<NextSuggestion> = Vec::new();

    // Tier 1: same-directory relative imports of the current file.
    let directory = parent_dir(current_path);
    for specifier in patterns::relative_imports(current_lines) {
        if results.len() >= MAX_NEXT {
            break;
        }
        let Some(resolved) = resolve_specifier(workspace, directory, &specifier) else {
            log::debug!("Import {specifier} did not resolve to an existing file");
            continue;
        };
        if !collected.insert(resolved.clone()) {
            continue;
        }
        let reason = if learned.contains(&resolved) {
            "Imported by the current file (already explored)".to_string()
        } else {
            "Imported directly by the file you are reading".to_string()
        };
        results.push(NextSuggestion {
            label: resolved.clone(),
            reason,
            path: resolved,
        });
    }

    // Tier 2: the walkthrough step after the current file's step.
    if results.len() < MAX_NEXT {
        if let Some(position) = walkthrough
            .iter()
            .position(|step| step.target.as_deref() == Some(current_path))
        {
            for step in &walkthrough[position + 1..] {
                let Some(target) = &step.target else { continue };
                if collected.contains(target) {
                    continue;
                }
                collected.insert(target.clone());
                results.push(NextSuggestion {
                    label: target.replace('\\', "/"),
                    reason: format!("Next walkthrough step: {}", step.title),
                    path: target.clone(),
                });
                break;
            }
        }
    }

    // Tier 3: unexplored ranked suggestions, in their original order.
    for candidate in suggestions {
        if results.len() >= MAX_NEXT {
            break;
        }
        if learned.contains(&candidate.path) || collected.contains(&candidate.path) {
            continue;
        }
        collected.insert(candidate.path.clone());
        results.push(NextSuggestion {
            label: candidate.label.clone(),
            reason: candidate.reason.clone(),
            path: candidate.path.clone(),
        });
    }

    results
}

fn parent_dir(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((directory, _)) => directory,
        None => "",
    }
}

/// Resolve one relative specifier against the current file's directory.
///
/// Candidates are probed in fixed order and the first existing file wins;
/// no further candidates are tried for that specifier.
fn resolve_specifier(
    workspace: &dyn Workspace,
    directory: &str,
    specifier: &str,
) -> Option<String> {
    let base = join_relative(directory, specifier)?;
    for extension in EXTENSION_ORDER {
        let candidate = format!("{base}{extension}");
        if workspace.exists(&candidate) {
            return Some(candidate);
        }
    }
    for index in INDEX_ORDER {
        let candidate = format!("{base}{index}");
        if workspace.exists(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Join a `./`- or `../`-style specifier onto a directory, collapsing
/// navigation segments. Escaping above the workspace root yields `None`.
fn join_relative(directory: &str, specifier: &str) -> Option<String> {
    let mut parts: Vec<&str> = directory
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();

    for segment in specifier.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }

    Some(parts.join("/"))
}
