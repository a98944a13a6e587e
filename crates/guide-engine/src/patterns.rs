//! Fixed, ordered tables of structural line patterns.
//!
//! Everything here is deliberately textual: matching is per line against a
//! small battery of regular expressions, so multi-line declarations and
//! unusual formatting can be missed. That trade-off is part of the product
//! contract, not an implementation shortcut.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::DeclarationKind;

/// Level 1-3 heading marker at the start of a line
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,3}\s+\S").expect("valid heading pattern"));

/// Line-initial `export`, optionally `default`, optionally a declaration
/// keyword, then the exported identifier
static EXPORT_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^export\s+(?:default\s+)?(?:(?:async\s+)?function\s+|(?:abstract\s+)?class\s+|const\s+|let\s+|var\s+|interface\s+|type\s+|enum\s+)?([A-Za-z_$][A-Za-z0-9_$]*)",
    )
    .expect("valid export pattern")
});

/// Function declaration at shallow indentation
static FUNCTION_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t]{0,2}(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s+([A-Za-z_$][A-Za-z0-9_$]*)",
    )
    .expect("valid function pattern")
});

/// Class declaration at shallow indentation
static CLASS_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t]{0,2}(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][A-Za-z0-9_$]*)",
    )
    .expect("valid class pattern")
});

/// Const-bound arrow function at shallow indentation
static ARROW_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[ \t]{0,2}(?:export\s+)?const\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(?:async\s+)?(?:\([^)]*\)|[A-Za-z_$][A-Za-z0-9_$]*)\s*=>",
    )
    .expect("valid arrow pattern")
});

/// `import ... from './x'`
static IMPORT_FROM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+[^'";]*?from\s*['"](\.\.?/[^'"]+)['"]"#).expect("valid import pattern")
});

/// Side-effect form: `import './x'`
static IMPORT_BARE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s*['"](\.\.?/[^'"]+)['"]"#).expect("valid bare import pattern")
});

/// CommonJS form: `require('./x')`
static REQUIRE_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"require\s*\(\s*['"](\.\.?/[^'"]+)['"]\s*\)"#).expect("valid require pattern")
});

/// `class`/`id` keyword followed by an optional `:`/`=`, optional quote, and
/// the selector name
static SELECTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(class|id)\b\s*[:=]?\s*["'`]?([A-Za-z_][A-Za-z0-9_-]*)"#)
        .expect("valid selector pattern")
});

/// Identifiers that the export pattern can capture when a line exports an
/// anonymous value; these are never real export names.
const DECLARATION_KEYWORDS: &[&str] = &[
    "function",
    "class",
    "const",
    "let",
    "var",
    "async",
    "default",
    "abstract",
    "interface",
    "type",
    "enum",
    "new",
    "await",
    "return",
];

/// One recognized declaration shape
pub struct DeclarationPattern {
    /// Which shape this pattern matches
    pub kind: DeclarationKind,
    regex: &'static Lazy<Regex>,
}

/// Ordered declaration table; the first matching shape wins per line and
/// terminates further checks on that line.
///
/// All shapes require shallow indentation (at most two leading whitespace
/// characters). Known limitation: nested and multi-line declarations are
/// intentionally not matched — widening this changes recall materially and
/// needs a product decision first.
pub static DECLARATION_PATTERNS: [DeclarationPattern; 3] = [
    DeclarationPattern {
        kind: DeclarationKind::Function,
        regex: &FUNCTION_DECL,
    },
    DeclarationPattern {
        kind: DeclarationKind::Class,
        regex: &CLASS_DECL,
    },
    DeclarationPattern {
        kind: DeclarationKind::ArrowFunction,
        regex: &ARROW_DECL,
    },
];

/// Whether a line is a level 1-3 heading
#[must_use]
pub fn is_heading(line: &str) -> bool {
    HEADING.is_match(line)
}

/// Extract the exported identifier from a line, if any
#[must_use]
pub fn export_name(line: &str) -> Option<&str> {
    let captures = EXPORT_NAME.captures(line)?;
    let name = captures.get(1)?.as_str();
    if DECLARATION_KEYWORDS.contains(&name) {
        return None;
    }
    Some(name)
}

/// Match a line against the declaration table, first shape wins
#[must_use]
pub fn match_declaration(line: &str) -> Option<(DeclarationKind, &str)> {
    for pattern in &DECLARATION_PATTERNS {
        if let Some(captures) = pattern.regex.captures(line) {
            if let Some(name) = captures.get(1) {
                return Some((pattern.kind, name.as_str()));
            }
        }
    }
    None
}

/// Collect distinct relative import specifiers in order of first appearance
#[must_use]
pub fn relative_imports(lines: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut specifiers = Vec::new();

    for line in lines {
        for pattern in [&IMPORT_FROM, &IMPORT_BARE, &REQUIRE_CALL] {
            for captures in pattern.captures_iter(line) {
                let specifier = captures[1].to_string();
                if seen.insert(specifier.clone()) {
                    specifiers.push(specifier);
                }
            }
        }
    }

    specifiers
}

/// Kind of selector extracted from a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Class,
    Id,
}

/// A `class`/`id` selector extracted from a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub kind: SelectorKind,
    pub name: String,
}

/// Extract a class/id selector from a free-text question, if present
#[must_use]
pub fn extract_selector(question: &str) -> Option<Selector> {
    let captures = SELECTOR.captures(question)?;
    let kind = if captures[1].eq_ignore_ascii_case("id") {
        SelectorKind::Id
    } else {
        SelectorKind::Class
    };
    Some(Selector {
        kind,
        name: captures[2].to_string(),
    })
}
