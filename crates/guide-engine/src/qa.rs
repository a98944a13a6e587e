use std::collections::HashSet;

use crate::error::{GuideError, Result};
use crate::patterns::{self, Selector, SelectorKind};
use crate::types::{DocumentKind, DocumentSummary, EvidenceLine, QaAnswer};

/// Maximum evidence lines returned per question
pub const MAX_EVIDENCE: usize = 6;

/// Question words that carry no search signal
const STOPWORDS: &[&str] = &[
    "what", "which", "where", "when", "then", "this", "that", "with", "from", "have", "your",
    "about",
];

/// A learned document as the question matcher sees it
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    /// Document lines, in order
    pub lines: &'a [String],

    /// Document class, which decides whether selector matching applies
    pub kind: DocumentKind,
}

/// Answer a free-text question against the current document.
///
/// An empty question is rejected before any matching happens. A missing
/// document or zero collected evidence produces the not-found message,
/// extended with a declarations pointer when the summary has declarations.
pub fn answer_question(
    question: &str,
    document: Option<DocumentView<'_>>,
    summary: Option<&DocumentSummary>,
) -> Result<QaAnswer> {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return Err(GuideError::EmptyQuestion);
    }

    let keywords = keyword_roots(trimmed);
    let selector = patterns::extract_selector(trimmed);

    let mut evidence: Vec<EvidenceLine> = Vec::new();
    let mut matched_selector: Option<&Selector> = None;

    if let Some(document) = document {
        let mut taken: HashSet<usize> = HashSet::new();

        if matches!(document.kind, DocumentKind::Markup | DocumentKind::Stylesheet) {
            if let Some(selector) = &selector {
                collect_selector_lines(&document, selector, &mut evidence, &mut taken);
                if !evidence.is_empty() {
                    matched_selector = Some(selector);
                }
            }
        }

        collect_keyword_lines(document.lines, &keywords, &mut evidence, &mut taken);
    }

    let message = compose_message(matched_selector, &evidence, summary);
    log::debug!(
        "Question {:?}: {} keyword(s), {} evidence line(s)",
        trimmed,
        keywords.len(),
        evidence.len()
    );

    Ok(QaAnswer {
        question: trimmed.to_string(),
        message,
        evidence,
    })
}

/// Tokenize a question into deduplicated keyword roots.
///
/// Tokens of three characters or fewer and stopwords are dropped; the
/// survivors are suffix-stemmed so "routing" also hits "router".
fn keyword_roots(question: &str) -> Vec<String> {
    let lowered = question.to_lowercase();
    let mut roots: Vec<String> = Vec::new();

    for token in lowered.split(|c: char| !c.is_alphanumeric() && c != '_') {
        if token.len() <= 3 || STOPWORDS.contains(&token) {
            continue;
        }
        let root = stem(token).to_string();
        if !roots.contains(&root) {
            roots.push(root);
        }
    }

    roots
}

/// Strip a common suffix when the remaining root keeps at least four
/// characters; otherwise leave the token alone
fn stem(token: &str) -> &str {
    for suffix in ["ing", "ed", "es", "s"] {
        if let Some(root) = token.strip_suffix(suffix) {
            if root.len() >= 4 {
                return root;
            }
        }
    }
    token
}

fn collect_selector_lines(
    document: &DocumentView<'_>,
    selector: &Selector,
    evidence: &mut Vec<EvidenceLine>,
    taken: &mut HashSet<usize>,
) {
    let needle = selector.name.to_lowercase();

    for (index, line) in document.lines.iter().enumerate() {
        if evidence.len() >= MAX_EVIDENCE {
            return;
        }
        let lowered = line.to_lowercase();
        let hit = match document.kind {
            DocumentKind::Markup => {
                let marker = match selector.kind {
                    SelectorKind::Class => "class=",
                    SelectorKind::Id => "id=",
                };
                lowered.contains(marker) && lowered.contains(&needle)
            }
            DocumentKind::Stylesheet => {
                let formatted = match selector.kind {
                    SelectorKind::Class => format!(".{needle}"),
                    SelectorKind::Id => format!("#{needle}"),
                };
                lowered.contains(&formatted)
            }
            _ => false,
        };
        if hit && taken.insert(index) {
            evidence.push(EvidenceLine {
                line: index + 1,
                text: line.trim().to_string(),
            });
        }
    }
}

fn collect_keyword_lines(
    lines: &[String],
    keywords: &[String],
    evidence: &mut Vec<EvidenceLine>,
    taken: &mut HashSet<usize>,
) {
    if keywords.is_empty() {
        return;
    }

    for (index, line) in lines.iter().enumerate() {
        if evidence.len() >= MAX_EVIDENCE {
            return;
        }
        if taken.contains(&index) {
            continue;
        }
        let lowered = line.to_lowercase();
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            taken.insert(index);
            evidence.push(EvidenceLine {
                line: index + 1,
                text: line.trim().to_string(),
            });
        }
    }
}

fn compose_message(
    matched_selector: Option<&Selector>,
    evidence: &[EvidenceLine],
    summary: Option<&DocumentSummary>,
) -> String {
    if evidence.is_empty() {
        let mut message = String::from("No matching lines were found for that question.");
        if summary.is_some_and(|s| !s.declarations.is_empty()) {
            message.push_str(" Try exploring the declarations listed in the file summary instead.");
        }
        return message;
    }

    match matched_selector {
        Some(selector) => {
            let noun = match selector.kind {
                SelectorKind::Class => "class",
                SelectorKind::Id => "id",
            };
            format!(
                "Matched the \"{}\" {noun} selector; the lines below use it.",
                selector.name
            )
        }
        None => "Here are the lines that best match your question.".to_string(),
    }
}
