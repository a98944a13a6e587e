use crate::patterns;
use crate::types::{Declaration, DocumentKind, DocumentSummary};

/// Maximum headings recorded per document
pub const MAX_HEADINGS: usize = 5;

/// Maximum exported names recorded per document
pub const MAX_EXPORTS: usize = 8;

/// Produce a structural summary of one document.
///
/// Heading extraction applies only to prose-markup documents; export and
/// declaration extraction apply to every document. Re-analyzing unchanged
/// text yields an identical summary.
pub fn analyze_document(path: &str, text: &str, kind: DocumentKind) -> DocumentSummary {
    let lines: Vec<&str> = text.lines().collect();

    let mut headings: Vec<String> = Vec::new();
    let mut exported_names: Vec<String> = Vec::new();
    let mut declarations: Vec<Declaration> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let number = index + 1;

        if kind == DocumentKind::ProseMarkup
            && headings.len() < MAX_HEADINGS
            && patterns::is_heading(line)
        {
            headings.push(line.trim().to_string());
        }

        if exported_names.len() < MAX_EXPORTS {
            if let Some(name) = patterns::export_name(line) {
                if !exported_names.iter().any(|existing| existing == name) {
                    exported_names.push(name.to_string());
                }
            }
        }

        if let Some((decl_kind, name)) = patterns::match_declaration(line) {
            // First occurrence wins.
            if !declarations.iter().any(|existing| existing.name == name) {
                declarations.push(Declaration {
                    name: name.to_string(),
                    kind: decl_kind,
                    line: number,
                });
            }
        }
    }

    log::debug!(
        "Analyzed {}: {} line(s), {} declaration(s), {} export(s)",
        path,
        lines.len(),
        declarations.len(),
        exported_names.len()
    );

    DocumentSummary {
        path: path.to_string(),
        display_path: path.replace('\\', "/"),
        line_count: lines.len(),
        headings,
        exported_names,
        declarations,
    }
}
