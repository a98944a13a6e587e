use std::collections::HashSet;

use crate::analyzer;
use crate::error::Result;
use crate::frameworks::{self, Framework};
use crate::host::Workspace;
use crate::next;
use crate::qa::{self, DocumentView};
use crate::ranker::{self, SuggestionRule};
use crate::types::{
    DocumentKind, DocumentSummary, FileCandidate, NextSuggestion, QaAnswer, WalkthroughStep,
};
use crate::walkthrough;

/// The document currently being explored
#[derive(Debug, Clone)]
pub struct ActiveDocument {
    /// Stable file identifier
    pub path: String,

    /// Document class
    pub kind: DocumentKind,

    /// Document lines, kept for question matching and import scanning
    pub lines: Vec<String>,

    /// Structural summary, recomputed on every learn
    pub summary: DocumentSummary,

    /// The most recent answer about this document
    pub last_answer: Option<QaAnswer>,
}

/// One user session over a single workspace snapshot.
///
/// Owns the only mutable state in the engine: the learned-file set and the
/// active document. The learned set grows monotonically and never shrinks.
/// Concurrent triggers are not coordinated — a second learn or question
/// overwrites the active context last-write-wins, and the engine makes no
/// stronger promise.
pub struct GuideSession<W> {
    workspace: W,
    rules: &'static [SuggestionRule],
    suggestions: Option<Vec<FileCandidate>>,
    frameworks: Option<Vec<Framework>>,
    learned: HashSet<String>,
    active: Option<ActiveDocument>,
}

impl<W: Workspace> GuideSession<W> {
    /// Create a session with the default suggestion rules
    pub fn new(workspace: W) -> Self {
        Self::with_rules(workspace, ranker::DEFAULT_RULES)
    }

    /// Create a session with a custom rule table
    pub fn with_rules(workspace: W, rules: &'static [SuggestionRule]) -> Self {
        Self {
            workspace,
            rules,
            suggestions: None,
            frameworks: None,
            learned: HashSet::new(),
            active: None,
        }
    }

    /// Ranked file candidates, computed once per snapshot and cached
    pub fn rank_suggestions(&mut self) -> &[FileCandidate] {
        if self.suggestions.is_none() {
            self.suggestions = Some(ranker::rank_suggestions(&self.workspace, self.rules));
        }
        self.suggestions.as_deref().unwrap_or(&[])
    }

    /// Detected framework families, computed once per snapshot and cached
    pub fn detect_frameworks(&mut self) -> &[Framework] {
        if self.frameworks.is_none() {
            self.frameworks = Some(frameworks::detect_frameworks(&self.workspace));
        }
        self.frameworks.as_deref().unwrap_or(&[])
    }

    /// Drop the cached snapshots so the next call recomputes from the
    /// workspace
    pub fn refresh(&mut self) {
        self.suggestions = None;
        self.frameworks = None;
    }

    /// Build the learning walkthrough from the cached suggestions and
    /// frameworks
    pub fn build_walkthrough(&mut self) -> Vec<WalkthroughStep> {
        self.rank_suggestions();
        self.detect_frameworks();
        walkthrough::build_walkthrough(
            self.suggestions.as_deref().unwrap_or(&[]),
            self.frameworks.as_deref().unwrap_or(&[]),
        )
    }

    /// Learn a file: compute its summary and make it the active document.
    ///
    /// The previous active context, including any answer, is replaced
    /// wholesale; the path joins the learned set permanently.
    pub fn learn_file(&mut self, path: &str, text: &str, kind: DocumentKind) -> &DocumentSummary {
        let summary = analyzer::analyze_document(path, text, kind);
        self.learned.insert(path.to_string());
        let active = self.active.insert(ActiveDocument {
            path: path.to_string(),
            kind,
            lines: text.lines().map(str::to_string).collect(),
            summary,
            last_answer: None,
        });
        &active.summary
    }

    /// Ask a free-text question about the active document
    pub fn ask_question(&mut self, question: &str) -> Result<QaAnswer> {
        let answer = match &self.active {
            Some(document) => qa::answer_question(
                question,
                Some(DocumentView {
                    lines: &document.lines,
                    kind: document.kind,
                }),
                Some(&document.summary),
            )?,
            None => qa::answer_question(question, None, None)?,
        };

        if let Some(document) = self.active.as_mut() {
            document.last_answer = Some(answer.clone());
        }
        Ok(answer)
    }

    /// Compute the "explore next" list for the active document.
    ///
    /// Without an active document there is nothing to resolve from, so the
    /// list is empty.
    pub fn next_suggestions(&mut self) -> Vec<NextSuggestion> {
        let walkthrough = self.build_walkthrough();
        let Some(document) = self.active.as_ref() else {
            return Vec::new();
        };
        next::resolve_next(
            &self.workspace,
            &document.path,
            &document.lines,
            self.suggestions.as_deref().unwrap_or(&[]),
            &walkthrough,
            &self.learned,
        )
    }

    /// Whether a file has been learned in this session
    #[must_use]
    pub fn is_learned(&self, path: &str) -> bool {
        self.learned.contains(path)
    }

    /// Number of files learned so far
    #[must_use]
    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    /// The active document, if a file has been learned
    #[must_use]
    pub fn active_document(&self) -> Option<&ActiveDocument> {
        self.active.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeWorkspace;
    use pretty_assertions::assert_eq;

    fn project() -> FakeWorkspace {
        FakeWorkspace::with_files(&[
            "README.md",
            "package.json",
            "src/index.ts",
            "src/utils.ts",
        ])
        .manifest(&["express"], &[])
    }

    #[test]
    fn learn_then_ask_flow() {
        let mut session = GuideSession::new(project());

        let summary = session.learn_file(
            "src/index.ts",
            "import { helper } from './utils'\nconst app = express()\napp.listen(3000)\n",
            DocumentKind::Other,
        );
        assert_eq!(summary.line_count, 3);

        let answer = session.ask_question("where does the app listen").unwrap();
        assert!(answer.evidence.iter().any(|e| e.line == 3));
        assert!(session
            .active_document()
            .and_then(|d| d.last_answer.as_ref())
            .is_some());
    }

    #[test]
    fn learned_set_grows_monotonically() {
        let mut session = GuideSession::new(project());

        session.learn_file("src/index.ts", "", DocumentKind::Other);
        session.learn_file("src/utils.ts", "", DocumentKind::Other);
        session.learn_file("src/index.ts", "", DocumentKind::Other);

        assert_eq!(session.learned_count(), 2);
        assert!(session.is_learned("src/index.ts"));
        assert!(session.is_learned("src/utils.ts"));
    }

    #[test]
    fn relearning_replaces_the_active_context() {
        let mut session = GuideSession::new(project());

        session.learn_file("src/index.ts", "function first() {}", DocumentKind::Other);
        session.ask_question("where is first").unwrap();
        // Last write wins: the second learn discards the summary and the
        // stored answer of the first.
        session.learn_file("src/utils.ts", "function second() {}", DocumentKind::Other);

        let active = session.active_document().unwrap();
        assert_eq!(active.path, "src/utils.ts");
        assert_eq!(active.summary.declarations[0].name, "second");
        assert!(active.last_answer.is_none());
    }

    #[test]
    fn question_without_active_document_is_not_found() {
        let mut session = GuideSession::new(project());
        let answer = session.ask_question("where is the router").unwrap();
        assert!(answer.evidence.is_empty());
        assert!(answer.message.contains("No matching lines"));
    }

    #[test]
    fn caches_hold_until_refresh() {
        let mut session = GuideSession::new(project());

        let first = session.rank_suggestions().to_vec();
        let frameworks = session.detect_frameworks().to_vec();
        assert_eq!(frameworks, vec![Framework::Express]);

        // Cached snapshot is returned as-is on the second call.
        let second = session.rank_suggestions().to_vec();
        assert_eq!(first, second);

        session.refresh();
        let third = session.rank_suggestions().to_vec();
        assert_eq!(first, third);
    }

    #[test]
    fn next_suggestions_need_an_active_document() {
        let mut session = GuideSession::new(project());
        assert!(session.next_suggestions().is_empty());
    }

    #[test]
    fn next_suggestions_combine_tiers() {
        let mut session = GuideSession::new(project());

        session.learn_file(
            "src/index.ts",
            "import { helper } from './utils'\n",
            DocumentKind::Other,
        );
        let results = session.next_suggestions();

        // Tier 1 resolves the import; the fallback tier fills from the
        // ranked suggestions without repeating learned files.
        assert_eq!(results[0].path, "src/utils.ts");
        assert!(results.iter().any(|r| r.path == "README.md"));
        assert!(results.iter().all(|r| r.path != "src/index.ts"));
        assert!(results.len() <= crate::next::MAX_NEXT);
    }
}
