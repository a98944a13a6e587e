use serde::{Deserialize, Serialize};

/// A file proposed by the suggestion ranker, with a justification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileCandidate {
    /// Workspace-relative display label
    pub label: String,

    /// Human-readable reason this file was suggested
    pub reason: String,

    /// Stable file identifier (workspace-relative path)
    pub path: String,
}

impl FileCandidate {
    /// Create a candidate whose label is the `/`-normalized path
    #[must_use]
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            label: path.replace('\\', "/"),
            reason: reason.into(),
            path,
        }
    }
}

/// One entry in the framework-branching learning sequence
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalkthroughStep {
    /// Short imperative title
    pub title: String,

    /// Why this step matters to a newcomer
    pub details: String,

    /// Resolved target file, when a suggestion label matched
    pub target: Option<String>,
}

impl WalkthroughStep {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        details: impl Into<String>,
        target: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            target,
        }
    }
}

/// Document classes the analyzer and question matcher treat differently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum DocumentKind {
    /// Prose with markup headings (Markdown and friends)
    ProseMarkup,
    /// Structural markup (HTML)
    Markup,
    /// Style sheets (CSS and preprocessor dialects)
    Stylesheet,
    /// Everything else, treated as plain source text
    Other,
}

impl DocumentKind {
    /// Classify from a file extension
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "md" | "mdx" | "markdown" | "rst" => Self::ProseMarkup,
            "html" | "htm" | "xhtml" => Self::Markup,
            "css" | "scss" | "sass" | "less" => Self::Stylesheet,
            _ => Self::Other,
        }
    }

    /// Classify from a file path
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        path.rsplit_once('.')
            .map(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(Self::Other)
    }

    /// Human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProseMarkup => "prose",
            Self::Markup => "markup",
            Self::Stylesheet => "stylesheet",
            Self::Other => "other",
        }
    }
}

/// Shape of a matched declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum DeclarationKind {
    Function,
    Class,
    ArrowFunction,
}

impl DeclarationKind {
    /// Human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Class => "class",
            Self::ArrowFunction => "arrow function",
        }
    }
}

/// A named declaration located in a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Declaration {
    /// Declared identifier
    pub name: String,

    /// Which pattern shape matched
    pub kind: DeclarationKind,

    /// Line number (1-indexed)
    pub line: usize,
}

/// Structural summary of one learned document.
///
/// Computed fresh every time a file is learned; never updated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSummary {
    /// Stable file identifier
    pub path: String,

    /// `/`-normalized path shown to the user
    pub display_path: String,

    /// Total number of lines
    pub line_count: usize,

    /// Level 1-3 headings, in document order
    pub headings: Vec<String>,

    /// Exported identifiers, first appearance order, deduplicated
    pub exported_names: Vec<String>,

    /// Named declarations, deduplicated by name (first occurrence wins)
    pub declarations: Vec<Declaration>,
}

/// A source line supporting an answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvidenceLine {
    /// Line number (1-indexed)
    pub line: usize,

    /// Trimmed source text
    pub text: String,
}

/// Answer to a free-text question about the current document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaAnswer {
    /// The question as asked (trimmed)
    pub question: String,

    /// Summary message shown above the evidence
    pub message: String,

    /// Matching lines, capped at the evidence limit
    pub evidence: Vec<EvidenceLine>,
}

/// An "explore next" recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextSuggestion {
    /// Workspace-relative display label
    pub label: String,

    /// Which signal produced this entry
    pub reason: String,

    /// Stable file identifier
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("md"), DocumentKind::ProseMarkup);
        assert_eq!(DocumentKind::from_extension("MD"), DocumentKind::ProseMarkup);
        assert_eq!(DocumentKind::from_extension("html"), DocumentKind::Markup);
        assert_eq!(DocumentKind::from_extension("scss"), DocumentKind::Stylesheet);
        assert_eq!(DocumentKind::from_extension("ts"), DocumentKind::Other);
    }

    #[test]
    fn document_kind_from_path() {
        assert_eq!(DocumentKind::from_path("docs/README.md"), DocumentKind::ProseMarkup);
        assert_eq!(DocumentKind::from_path("src/index.html"), DocumentKind::Markup);
        assert_eq!(DocumentKind::from_path("styles/app.css"), DocumentKind::Stylesheet);
        assert_eq!(DocumentKind::from_path("Makefile"), DocumentKind::Other);
    }

    #[test]
    fn candidate_label_is_normalized() {
        let candidate = FileCandidate::new("src\\main.ts", "entry point");
        assert_eq!(candidate.label, "src/main.ts");
        assert_eq!(candidate.path, "src\\main.ts");
    }
}
