//! # Guide Engine
//!
//! Host-independent core of the repo-guide codebase-orientation assistant.
//! Given an arbitrary project tree it proposes which files a newcomer
//! should read first, summarizes a chosen file's structure, answers
//! free-text questions by pointing at matching lines, and suggests what to
//! explore next. It never mutates source files.
//!
//! ## Architecture
//!
//! ```text
//! Workspace (host trait: find / exists / manifest)
//!     │
//!     ├──> Suggestion Ranker ──┐
//!     │                        ├──> Walkthrough Builder
//!     ├──> Framework Detector ─┘
//!     │
//!     └──> GuideSession (LearnedSet + Active Context)
//!              ├─> Document Analyzer  → DocumentSummary
//!              ├─> Question Matcher   → QaAnswer
//!              └─> Next Resolver      → bounded "explore next" list
//! ```
//!
//! All ranking is deterministic, rule-ordered heuristics: first-match-wins
//! over fixed rule tables, strict tier priority, bounded result sizes.
//! Structural extraction is pattern-based by contract, so code that does
//! not match the expected textual shapes can be missed.
//!
//! ## Example
//!
//! ```rust
//! use guide_engine::{DocumentKind, GuideSession, ProjectManifest, Workspace};
//!
//! struct EmptyHost;
//!
//! impl Workspace for EmptyHost {
//!     fn find_files(&self, _: &str, _: Option<&str>, _: usize) -> Vec<String> {
//!         Vec::new()
//!     }
//!     fn exists(&self, _: &str) -> bool {
//!         false
//!     }
//!     fn read_manifest(&self) -> Option<ProjectManifest> {
//!         None
//!     }
//! }
//!
//! let mut session = GuideSession::new(EmptyHost);
//! let summary = session.learn_file(
//!     "src/config.ts",
//!     "export function loadConfig() {}",
//!     DocumentKind::Other,
//! );
//! assert_eq!(summary.declarations[0].name, "loadConfig");
//! ```

mod analyzer;
mod error;
mod frameworks;
mod host;
mod next;
mod patterns;
mod qa;
mod ranker;
mod session;
#[cfg(test)]
mod test_support;
mod types;
mod walkthrough;

pub use analyzer::{analyze_document, MAX_EXPORTS, MAX_HEADINGS};
pub use error::{GuideError, Result};
pub use frameworks::{detect_frameworks, Framework};
pub use host::{ProjectManifest, Workspace};
pub use next::{resolve_next, MAX_NEXT};
pub use qa::{answer_question, DocumentView, MAX_EVIDENCE};
pub use ranker::{
    rank_suggestions, SuggestionRule, DEFAULT_RULES, DEPENDENCY_CACHE_GLOB, MATCHES_PER_RULE,
};
pub use session::{ActiveDocument, GuideSession};
pub use types::{
    Declaration, DeclarationKind, DocumentKind, DocumentSummary, EvidenceLine, FileCandidate,
    NextSuggestion, QaAnswer, WalkthroughStep,
};
pub use walkthrough::build_walkthrough;
