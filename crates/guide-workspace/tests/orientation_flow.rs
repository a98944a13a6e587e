//! End-to-end flow over a real project tree: rank, detect, walk through,
//! learn, ask, and resolve what to explore next.

use std::fs;
use std::path::Path;

use guide_engine::{Framework, GuideSession};
use guide_workspace::{read_document, ProjectWorkspace};
use tempfile::tempdir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn fixture(root: &Path) {
    write(root, "README.md", "# Demo app\n\n## Setup\n\nnpm install\n");
    write(
        root,
        "package.json",
        r#"{
            "name": "demo",
            "dependencies": { "next": "13.0.0", "react": "18.0.0" },
            "scripts": { "dev": "next dev" }
        }"#,
    );
    write(
        root,
        "src/index.ts",
        "import { helper } from './utils'\n\nexport function start() {\n  helper()\n}\n",
    );
    write(root, "src/utils.ts", "export function helper() {}\n");
    write(root, "src/routes/users.ts", "router.get('/users')\n");
    write(root, "node_modules/next/package.json", "{}");
}

#[test]
fn full_orientation_flow() {
    let temp = tempdir().unwrap();
    fixture(temp.path());

    let workspace = ProjectWorkspace::new(temp.path());
    let mut session = GuideSession::new(workspace);

    // Ranked suggestions: README first, dependency cache excluded.
    let suggestions = session.rank_suggestions().to_vec();
    assert_eq!(suggestions[0].path, "README.md");
    assert!(suggestions.iter().any(|c| c.path == "package.json"));
    assert!(suggestions.iter().all(|c| !c.path.contains("node_modules")));

    // Manifest names next and react.
    let frameworks = session.detect_frameworks().to_vec();
    assert_eq!(frameworks, vec![Framework::NextJs, Framework::React]);

    // Walkthrough branches for Next.js and keeps the plain React step.
    let walkthrough = session.build_walkthrough();
    let titles: Vec<&str> = walkthrough.iter().map(|s| s.title.as_str()).collect();
    assert!(titles.contains(&"Review the Next.js routing tree"));
    assert!(titles.contains(&"Find the React root render"));
    assert!(!titles.contains(&"Check the Vite config"));
    assert_eq!(walkthrough[0].target.as_deref(), Some("README.md"));

    // Learn the entry point and question it.
    let document = read_document(temp.path(), "src/index.ts").unwrap();
    let summary = session.learn_file(&document.path, &document.text, document.kind);
    assert_eq!(summary.declarations[0].name, "start");
    assert_eq!(summary.exported_names, vec!["start"]);

    let answer = session.ask_question("where is the helper used").unwrap();
    assert!(!answer.evidence.is_empty());

    // Tier 1 resolves the relative import to the .ts file.
    let next = session.next_suggestions();
    assert_eq!(next[0].path, "src/utils.ts");
    assert!(next.iter().all(|n| n.path != "src/index.ts"));
    assert!(next.len() <= 6);
}

#[test]
fn markdown_learning_and_questions() {
    let temp = tempdir().unwrap();
    fixture(temp.path());

    let workspace = ProjectWorkspace::new(temp.path());
    let mut session = GuideSession::new(workspace);

    let document = read_document(temp.path(), "README.md").unwrap();
    let summary = session.learn_file(&document.path, &document.text, document.kind);

    assert_eq!(summary.headings, vec!["# Demo app", "## Setup"]);
    assert!(summary.declarations.is_empty());

    let answer = session.ask_question("how do I install").unwrap();
    assert!(answer.evidence.iter().any(|e| e.text.contains("npm install")));
}
